//! Simulation module for state management and the tick loop
//!
//! `Simulation` is the single context value the loop, renderer and input
//! handler share. It owns the oscillator state, parameters, orbit, view and
//! run flags; nothing here is global.

pub mod input;
pub mod pacing;
pub mod trajectory;

pub use input::dispatch;
pub use pacing::FramePacer;
pub use trajectory::Trajectory;

use std::time::{Duration, Instant};

use crate::config::ViewerConfig;
use crate::physics::{lorenz_step, LorenzParams, State};
use crate::rendering::view::ViewTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }
}

/// Durations measured during the last tick, for display only
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimingSamples {
    pub integration: Duration,
    pub render: Duration,
}

pub struct Simulation {
    pub state: State,
    pub params: LorenzParams,
    pub dt: f64,
    pub orbit: Trajectory,
    pub view: ViewTransform,
    pub run_state: RunState,
    // Toggles
    pub show_orbit: bool,
    pub show_timers: bool,
    pub show_help: bool,
    pub quit_requested: bool,
    pub timings: TimingSamples,
    pub cursor: (i32, i32),
    pub pan_anchor: (i32, i32),
    /// Surface size seen on the last tick, used by the reset-view command
    pub surface: (f32, f32),
    default_scale: f64,
}

impl Simulation {
    pub fn new(config: &ViewerConfig) -> Self {
        let state = config.start_state();
        let surface = (config.window_width as f32, config.window_height as f32);
        let mut view = ViewTransform::centered(surface.0, surface.1, config.scale);
        view.set_axes(config.axes);
        Self {
            state,
            params: config.params,
            dt: config.dt,
            orbit: Trajectory::seeded(state, config.orbit_capacity, config.orbit_increment),
            view,
            run_state: RunState::Paused,
            show_orbit: true,
            show_timers: true,
            show_help: false,
            quit_requested: false,
            timings: TimingSamples::default(),
            cursor: (0, 0),
            pan_anchor: (0, 0),
            surface,
            default_scale: config.scale,
        }
    }

    /// Leave the initial Paused state
    pub fn begin(&mut self) {
        self.run_state = RunState::Running;
        log::info!("Simulation running");
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn toggle_pause(&mut self) {
        self.run_state = self.run_state.toggled();
    }

    /// Simulation half of a tick: integrate and record one point when running.
    pub fn step(&mut self) {
        if !self.is_running() {
            self.timings.integration = Duration::ZERO;
            return;
        }
        let started = Instant::now();
        self.state = lorenz_step(self.state, &self.params, self.dt);
        self.orbit.append(self.state);
        self.timings.integration = started.elapsed();
    }

    /// Called when the surface size is (re)observed
    pub fn set_surface(&mut self, width: f32, height: f32) {
        self.surface = (width, height);
    }

    pub fn reset_view(&mut self) {
        let (w, h) = self.surface;
        self.view.recenter(w, h, self.default_scale);
    }

    /// Close a tick opened with `FramePacer::begin`: keep the render sample,
    /// then sleep out the remaining budget. Returns the time slept.
    pub fn finish_tick(
        &mut self,
        pacer: &mut FramePacer,
        started: Instant,
        render: Duration,
    ) -> Duration {
        self.timings.render = render;
        pacer.finish(started)
    }
}
