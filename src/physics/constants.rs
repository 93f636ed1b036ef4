//! Default values for the oscillator and its integration.

// ---------------------------------------------------------------------------
// Classical chaotic regime
// ---------------------------------------------------------------------------
pub const DEFAULT_RHO: f64 = 28.0;
pub const DEFAULT_SIGMA: f64 = 10.0;
pub const DEFAULT_BETA: f64 = 8.0 / 3.0;

// ---------------------------------------------------------------------------
// Integration
// ---------------------------------------------------------------------------
pub const DEFAULT_TIME_STEP: f64 = 0.01;
pub const INITIAL_STATE: [f64; 3] = [1.0, 1.0, 1.0];

/// Increment applied by a single parameter key press
pub const PARAM_NUDGE: f64 = 0.1;
