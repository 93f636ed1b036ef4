use super::{DrawCommand, Palette};
use crate::simulation::Simulation;

/// Body marker radius in simulation units
pub const BODY_RADIUS: f64 = 1.0;

const MARGIN: f32 = 10.0;
const LINE_STEP: f32 = 15.0;
const PARAMS_COLUMN: f32 = 130.0;

const HELP_LINES: [&str; 9] = [
    "P      pause / resume",
    "O      toggle orbit trail",
    "E      erase orbit",
    "T      toggle timers",
    "Z X Y  view x-y / y-z / x-z plane",
    "Up/Dn  rho +/- 0.1",
    "Lt/Rt  sigma -/+ 0.1",
    "Wheel  zoom at cursor, drag to pan",
    "R      reset view, H help, Esc quit",
];

/// Loop-level numbers the overlay shows besides the simulation itself
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub fps: f64,
}

fn text(commands: &mut Vec<DrawCommand>, text: String, x: f32, y: f32, color: Palette) {
    commands.push(DrawCommand::Text { text, x, y, color });
}

/// Describe one frame. Pure: reads the simulation, returns draw calls.
pub fn compose_frame(sim: &Simulation, stats: &FrameStats, width: f32, height: f32) -> Vec<DrawCommand> {
    let show_trail = sim.show_orbit && sim.orbit.len() > 1;
    let mut commands = Vec::with_capacity(16 + if show_trail { sim.orbit.len() } else { 0 });
    commands.push(DrawCommand::Clear(Palette::Background));

    match sim.orbit.latest() {
        Ok(latest) => {
            let (x, y) = sim.view.project(latest);
            commands.push(DrawCommand::Circle {
                x: x as f32,
                y: y as f32,
                radius: sim.view.marker_radius(BODY_RADIUS),
                color: Palette::Body,
            });
        }
        Err(e) => log::debug!("No body marker: {e}"),
    }

    if show_trail {
        for (a, b) in sim.orbit.segments() {
            let (x1, y1) = sim.view.project(a);
            let (x2, y2) = sim.view.project(b);
            commands.push(DrawCommand::Line {
                x1: x1 as f32,
                y1: y1 as f32,
                x2: x2 as f32,
                y2: y2 as f32,
                color: Palette::Trail,
            });
        }
    }

    text(&mut commands, format!("Scale {:.1}", sim.view.scale), MARGIN, MARGIN, Palette::Label);
    if !sim.is_running() {
        text(&mut commands, "PAUSED (P)".to_string(), MARGIN, MARGIN + LINE_STEP, Palette::Highlight);
    }

    if sim.show_timers {
        let bottom = height - MARGIN;
        text(
            &mut commands,
            format!("Mouse {} {}", sim.cursor.0, sim.cursor.1),
            MARGIN,
            bottom,
            Palette::Label,
        );
        text(&mut commands, format!("fps {:.1}", stats.fps), MARGIN, bottom - LINE_STEP, Palette::Label);
        text(
            &mut commands,
            format!("update orbits {:5.1}ms", sim.timings.integration.as_secs_f64() * 1000.0),
            MARGIN,
            bottom - 2.0 * LINE_STEP,
            Palette::Label,
        );
        text(
            &mut commands,
            format!("repaint {:5.1}ms", sim.timings.render.as_secs_f64() * 1000.0),
            MARGIN,
            bottom - 3.0 * LINE_STEP,
            Palette::Label,
        );
    }

    let column = width - PARAMS_COLUMN;
    let bottom = height - MARGIN;
    text(&mut commands, "Oscillator parameters".to_string(), column, bottom - 3.0 * LINE_STEP, Palette::Label);
    text(&mut commands, format!("rho {:.2}", sim.params.rho), column, bottom - 2.0 * LINE_STEP, Palette::Label);
    text(&mut commands, format!("sigma {:.2}", sim.params.sigma), column, bottom - LINE_STEP, Palette::Label);
    text(&mut commands, format!("beta {:.2}", sim.params.beta), column, bottom, Palette::Label);

    if sim.show_help {
        for (i, line) in HELP_LINES.iter().enumerate() {
            let y = MARGIN + (i as f32 + 3.0) * LINE_STEP;
            text(&mut commands, line.to_string(), MARGIN, y, Palette::Highlight);
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::physics::State;

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn line_count(commands: &[DrawCommand]) -> usize {
        commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. })).count()
    }

    fn sim_with_points(n: usize) -> Simulation {
        let mut sim = Simulation::new(&ViewerConfig::default());
        for i in 1..n {
            sim.orbit.append(State::new(i as f64, 2.0 * i as f64, 0.0));
        }
        sim
    }

    #[test]
    fn test_trail_has_one_line_per_pair() {
        let sim = sim_with_points(6);
        let commands = compose_frame(&sim, &FrameStats::default(), 800.0, 600.0);
        assert_eq!(commands[0], DrawCommand::Clear(Palette::Background));
        assert_eq!(line_count(&commands), 5);
    }

    #[test]
    fn test_hidden_trail_draws_no_lines() {
        let mut sim = sim_with_points(6);
        sim.show_orbit = false;
        let commands = compose_frame(&sim, &FrameStats::default(), 800.0, 600.0);
        assert_eq!(line_count(&commands), 0);
    }

    #[test]
    fn test_marker_at_projected_latest_point() {
        let sim = sim_with_points(3);
        let commands = compose_frame(&sim, &FrameStats::default(), 800.0, 600.0);
        let latest = sim.orbit.latest().unwrap();
        let (px, py) = sim.view.project(latest);
        assert!(commands.contains(&DrawCommand::Circle {
            x: px as f32,
            y: py as f32,
            radius: sim.view.marker_radius(BODY_RADIUS),
            color: Palette::Body,
        }));
    }

    #[test]
    fn test_empty_store_skips_marker() {
        let mut sim = sim_with_points(3);
        sim.orbit.clear();
        let commands = compose_frame(&sim, &FrameStats::default(), 800.0, 600.0);
        assert!(!commands.iter().any(|c| matches!(c, DrawCommand::Circle { .. })));
        assert_eq!(line_count(&commands), 0);
    }

    #[test]
    fn test_overlay_text() {
        let mut sim = sim_with_points(1);
        let stats = FrameStats { fps: 200.0 };
        let shown = compose_frame(&sim, &stats, 800.0, 600.0);
        let lines = texts(&shown);
        assert!(lines.contains(&"Scale 0.2"));
        assert!(lines.contains(&"fps 200.0"));
        assert!(lines.contains(&"rho 28.00"));
        assert!(lines.contains(&"sigma 10.00"));
        assert!(lines.contains(&"beta 2.67"));
        assert!(lines.contains(&"PAUSED (P)"));

        sim.show_timers = false;
        sim.begin();
        let hidden = compose_frame(&sim, &stats, 800.0, 600.0);
        let lines = texts(&hidden);
        assert!(!lines.iter().any(|l| l.starts_with("fps")));
        assert!(!lines.iter().any(|l| l.starts_with("Mouse")));
        assert!(!lines.contains(&"PAUSED (P)"));
        assert!(lines.contains(&"Oscillator parameters"));
    }

    #[test]
    fn test_parameter_block_anchored_bottom_right() {
        let sim = sim_with_points(1);
        let commands = compose_frame(&sim, &FrameStats::default(), 1000.0, 700.0);
        let beta = commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Text { text, .. } if text.starts_with("beta")));
        match beta {
            Some(DrawCommand::Text { x, y, .. }) => {
                assert_eq!(*x, 870.0);
                assert_eq!(*y, 690.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
