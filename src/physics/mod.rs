//! Physics module for the Lorenz oscillator
//!
//! Holds the vector field, the fixed-step integrator and the default
//! constants the rest of the viewer starts from.

pub mod constants;
pub mod lorenz;

// Re-export commonly used items
pub use lorenz::{lorenz_step, LorenzParams};

/// Phase-space point (x, y, z)
pub type State = glam::DVec3;
