//! Rendering module
//!
//! Frames are described as plain `DrawCommand` lists by `renderer`, which
//! never touches the window. `surface` replays a list with macroquad.

pub mod renderer;
pub mod surface;
pub mod view;

// Re-export commonly used items
pub use renderer::{compose_frame, FrameStats};

/// Logical colors; the surface decides the actual RGB values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Background,
    Body,
    Trail,
    Label,
    Highlight,
}

/// One primitive draw call in pixel coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Palette),
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Palette,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Palette,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        color: Palette,
    },
}
