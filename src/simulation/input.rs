//! Input handling
//!
//! Window input is turned into a closed set of `InputEvent`s and applied to
//! the simulation through `dispatch`, between ticks.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use macroquad::prelude::{
    get_keys_pressed, is_key_down, is_mouse_button_down, is_mouse_button_pressed,
    mouse_position, mouse_wheel, KeyCode, MouseButton,
};

use super::Simulation;
use crate::physics::constants::PARAM_NUDGE;
use crate::rendering::view::{AxisPair, ZoomDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleOrbitTrail,
    Erase,
    TogglePause,
    ToggleTimers,
    View(AxisPair),
    RhoUp,
    RhoDown,
    SigmaDown,
    SigmaUp,
    ResetView,
    ToggleHelp,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyCommand),
    /// Key with no binding; logged and dropped
    Unmapped(String),
    Wheel(ZoomDirection),
    PressAt((i32, i32)),
    DragTo((i32, i32)),
    CursorMoved((i32, i32)),
}

pub fn command_for(key: KeyCode) -> Option<KeyCommand> {
    let command = match key {
        KeyCode::O => KeyCommand::ToggleOrbitTrail,
        KeyCode::E => KeyCommand::Erase,
        KeyCode::P => KeyCommand::TogglePause,
        KeyCode::T => KeyCommand::ToggleTimers,
        KeyCode::Z => KeyCommand::View(AxisPair::XY),
        KeyCode::X => KeyCommand::View(AxisPair::YZ),
        KeyCode::Y => KeyCommand::View(AxisPair::XZ),
        KeyCode::Up => KeyCommand::RhoUp,
        KeyCode::Down => KeyCommand::RhoDown,
        KeyCode::Left => KeyCommand::SigmaDown,
        KeyCode::Right => KeyCommand::SigmaUp,
        KeyCode::R => KeyCommand::ResetView,
        KeyCode::H => KeyCommand::ToggleHelp,
        KeyCode::Escape => KeyCommand::Quit,
        _ => return None,
    };
    Some(command)
}

/// Wheel notches up zoom in, down zoom out
pub fn wheel_direction(wheel_y: f32) -> Option<ZoomDirection> {
    if wheel_y > 0.0 {
        Some(ZoomDirection::In)
    } else if wheel_y < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}

/// Keys that keep firing while held
const REPEATING_KEYS: [KeyCode; 4] = [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right];

/// Auto-repeat for held keys. The initial press comes from `get_keys_pressed`;
/// repeats start after `delay` and then fire every `interval`.
#[derive(Debug, Clone)]
pub struct KeyRepeat {
    delay: Duration,
    interval: Duration,
    next_fire: HashMap<KeyCode, Instant>,
}

impl KeyRepeat {
    pub fn new(delay: Duration, interval: Duration) -> Self {
        Self {
            delay,
            interval,
            next_fire: HashMap::new(),
        }
    }

    /// Returns true when a held key is due for a repeat at `now`.
    pub fn update(&mut self, key: KeyCode, down: bool, now: Instant) -> bool {
        if !down {
            self.next_fire.remove(&key);
            return false;
        }
        match self.next_fire.get(&key).copied() {
            None => {
                self.next_fire.insert(key, now + self.delay);
                false
            }
            Some(due) if now >= due => {
                self.next_fire.insert(key, now + self.interval);
                true
            }
            Some(_) => false,
        }
    }
}

impl Default for KeyRepeat {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Duration::from_millis(50))
    }
}

/// Collect this frame's window input. Must run inside the macroquad loop.
pub fn poll(last_cursor: (i32, i32), repeat: &mut KeyRepeat) -> Vec<InputEvent> {
    let mut events = Vec::new();

    for key in get_keys_pressed() {
        events.push(match command_for(key) {
            Some(command) => InputEvent::Key(command),
            None => InputEvent::Unmapped(format!("{key:?}")),
        });
    }

    let now = Instant::now();
    for key in REPEATING_KEYS {
        if repeat.update(key, is_key_down(key), now) {
            if let Some(command) = command_for(key) {
                events.push(InputEvent::Key(command));
            }
        }
    }

    let (mx, my) = mouse_position();
    let cursor = (mx as i32, my as i32);
    if cursor != last_cursor {
        events.push(InputEvent::CursorMoved(cursor));
    }

    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(InputEvent::PressAt(cursor));
    } else if is_mouse_button_down(MouseButton::Left) && cursor != last_cursor {
        events.push(InputEvent::DragTo(cursor));
    }

    if let Some(direction) = wheel_direction(mouse_wheel().1) {
        events.push(InputEvent::Wheel(direction));
    }
    events
}

pub fn dispatch(sim: &mut Simulation, event: InputEvent) {
    match event {
        InputEvent::Key(command) => apply_command(sim, command),
        InputEvent::Unmapped(name) => log::debug!("Key pressed: {name} (not implemented)"),
        InputEvent::Wheel(direction) => {
            sim.view.zoom_at(sim.cursor, direction);
            log::info!(
                "Rescale {:.3}, shift {} {}",
                sim.view.scale,
                sim.view.shift_x,
                sim.view.shift_y
            );
        }
        InputEvent::PressAt(pixel) => sim.pan_anchor = pixel,
        InputEvent::DragTo(pixel) => {
            let (ax, ay) = sim.pan_anchor;
            sim.view
                .pan((pixel.0.saturating_sub(ax), pixel.1.saturating_sub(ay)));
            sim.pan_anchor = pixel;
        }
        InputEvent::CursorMoved(pixel) => sim.cursor = pixel,
    }
}

fn apply_command(sim: &mut Simulation, command: KeyCommand) {
    match command {
        KeyCommand::ToggleOrbitTrail => {
            sim.show_orbit = !sim.show_orbit;
            log::info!("Key O: show orbit {}", sim.show_orbit);
        }
        KeyCommand::Erase => {
            if sim.orbit.is_empty() {
                log::info!("Key E: orbit already empty");
            } else {
                log::info!("Key E: erase {} orbit points", sim.orbit.len());
                sim.orbit.clear();
            }
        }
        KeyCommand::TogglePause => {
            sim.toggle_pause();
            log::info!("Key P: {:?}", sim.run_state);
        }
        KeyCommand::ToggleTimers => {
            sim.show_timers = !sim.show_timers;
            log::info!("Key T: show timers {}", sim.show_timers);
        }
        KeyCommand::View(axes) => {
            sim.view.set_axes(axes);
            log::info!("View {} plane", axes.label());
        }
        KeyCommand::RhoUp => {
            sim.params.rho += PARAM_NUDGE;
            log::info!("rho up: {:.2}", sim.params.rho);
        }
        KeyCommand::RhoDown => {
            sim.params.rho -= PARAM_NUDGE;
            log::info!("rho down: {:.2}", sim.params.rho);
        }
        KeyCommand::SigmaDown => {
            sim.params.sigma -= PARAM_NUDGE;
            log::info!("sigma down: {:.2}", sim.params.sigma);
        }
        KeyCommand::SigmaUp => {
            sim.params.sigma += PARAM_NUDGE;
            log::info!("sigma up: {:.2}", sim.params.sigma);
        }
        KeyCommand::ResetView => {
            sim.reset_view();
            log::info!("View reset to surface center");
        }
        KeyCommand::ToggleHelp => sim.show_help = !sim.show_help,
        KeyCommand::Quit => {
            sim.quit_requested = true;
            log::info!("Quit requested");
        }
    }
}
