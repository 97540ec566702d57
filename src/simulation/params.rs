//! Physical constants and runtime parameters for the simulation.
//!
//! The constants match the classic solar-system demo values; `Parameters`
//! carries the subset a scenario may override.

/// Astronomical unit, meters.
pub const AU: f64 = 1.496e11;

/// Gravitational constant, SI.
pub const G: f64 = 6.67428e-11;

/// Simulated time advanced per integration step: one day, in seconds.
/// Fixed per frame, decoupled from the rendering frame rate.
pub const TIMESTEP: f64 = 86400.0;

/// Linear simulation-space to screen-space factor: 70 pixels per AU.
pub const SCALE: f64 = 70.0 / AU;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub timestep: f64, // step size, seconds of simulated time per frame
    pub scale: f64, // meters-to-pixels factor for rendering
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: G,
            timestep: TIMESTEP,
            scale: SCALE,
        }
    }
}
