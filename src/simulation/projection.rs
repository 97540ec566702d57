//! Simulation-space to screen-space projection
//!
//! A pure linear transform: `screen = sim * scale + center`. The viewer
//! applies it exactly once per point, both for body positions and for
//! every orbit-trail vertex.

use super::states::NVec2;

/// Project a simulation-space position (meters) to screen space (pixels).
pub fn sim_to_screen(x: NVec2, scale: f64, center: NVec2) -> NVec2 {
    x * scale + center
}

/// Invert [`sim_to_screen`], recovering the simulation-space position.
pub fn screen_to_sim(p: NVec2, scale: f64, center: NVec2) -> NVec2 {
    (p - center) / scale
}
