// macroquad backend for composed frames
use macroquad::prelude::*;

use super::{DrawCommand, Palette};

const FONT_SIZE: f32 = 16.0;

fn color_of(palette: Palette) -> Color {
    match palette {
        Palette::Background => BLACK,
        Palette::Body => BLUE,
        Palette::Trail => GRAY,
        Palette::Label => WHITE,
        Palette::Highlight => YELLOW,
    }
}

pub fn window_size() -> (f32, f32) {
    (screen_width(), screen_height())
}

pub fn present(commands: &[DrawCommand]) {
    for command in commands {
        match command {
            DrawCommand::Clear(color) => clear_background(color_of(*color)),
            DrawCommand::Circle { x, y, radius, color } => {
                draw_circle(*x, *y, *radius, color_of(*color));
            }
            DrawCommand::Line { x1, y1, x2, y2, color } => {
                draw_line(*x1, *y1, *x2, *y2, 1.0, color_of(*color));
            }
            DrawCommand::Text { text, x, y, color } => {
                draw_text(text, *x, *y, FONT_SIZE, color_of(*color));
            }
        }
    }
}
