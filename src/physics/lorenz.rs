use serde::{Deserialize, Serialize};

use super::constants::*;
use super::State;

/// Shape parameters of the Lorenz equations.
///
/// No bounds are enforced: any value is accepted, including ones that make
/// the trajectory blow up to infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LorenzParams {
    pub rho: f64,
    pub sigma: f64,
    pub beta: f64,
}

impl Default for LorenzParams {
    fn default() -> Self {
        Self {
            rho: DEFAULT_RHO,
            sigma: DEFAULT_SIGMA,
            beta: DEFAULT_BETA,
        }
    }
}

// Equations
pub fn lorenz_derivatives(state: State, params: &LorenzParams) -> State {
    State::new(
        params.sigma * (state.y - state.x),
        state.x * (params.rho - state.z) - state.y,
        state.x * state.y - params.beta * state.z,
    )
}

/// One explicit Euler step. All three components are advanced from the
/// pre-step values of x, y and z.
pub fn lorenz_step(state: State, params: &LorenzParams, dt: f64) -> State {
    state + dt * lorenz_derivatives(state, params)
}
