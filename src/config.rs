//! Viewer configuration
//!
//! Everything the viewer starts from lives here. No file is read at startup;
//! the defaults are the configuration and get logged once as JSON.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::physics::constants::{DEFAULT_TIME_STEP, INITIAL_STATE};
use crate::physics::{LorenzParams, State};
use crate::rendering::view::{AxisPair, DEFAULT_SCALE};
use crate::simulation::trajectory::{DEFAULT_CAPACITY, DEFAULT_INCREMENT};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,
    /// Tick budget in milliseconds
    pub tick_ms: u64,
    pub dt: f64,
    pub initial_state: [f64; 3],
    pub params: LorenzParams,
    pub orbit_capacity: usize,
    pub orbit_increment: usize,
    pub scale: f64,
    pub axes: AxisPair,
    /// Enter Running right after setup instead of waiting for the pause key.
    /// Off by default: the window opens paused.
    pub autostart: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: "Lorenz Oscillator".to_string(),
            window_width: 800,
            window_height: 600,
            tick_ms: 5,
            dt: DEFAULT_TIME_STEP,
            initial_state: INITIAL_STATE,
            params: LorenzParams::default(),
            orbit_capacity: DEFAULT_CAPACITY,
            orbit_increment: DEFAULT_INCREMENT,
            scale: DEFAULT_SCALE,
            axes: AxisPair::XY,
            autostart: false,
        }
    }
}

impl ViewerConfig {
    #[cfg(test)]
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(anyhow::anyhow!("scale must be positive, got {}", self.scale));
        }
        if self.orbit_increment == 0 {
            return Err(anyhow::anyhow!("orbit_increment must be at least 1"));
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(anyhow::anyhow!(
                "window size must be positive, got {}x{}",
                self.window_width,
                self.window_height
            ));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn start_state(&self) -> State {
        State::from_array(self.initial_state)
    }
}
