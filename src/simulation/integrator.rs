//! Fixed-step Euler-Cromer time integration
//!
//! Advances the whole system by one step of `params.timestep` using
//! snapshot semantics: every force (and every anchor distance) is computed
//! from the frame-start positions before any body's state is committed, so
//! a body processed later in the step never sees an already-updated
//! neighbor. Velocity is kicked from the frame-start forces, then position
//! drifts with the updated velocity (Euler-Cromer), which keeps orbits
//! stable over long runs despite first-order accuracy.

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one Euler-Cromer step of `params.timestep`.
///
/// Per body: `v += (F / m) * dt`, then `x += v * dt`, then the new
/// position is appended to the orbit trail. `sys.t` advances by `dt`.
/// Non-anchor bodies also get `distance_to_anchor` refreshed from the
/// frame-start positions.
pub fn euler_cromer_step(sys: &mut System, forces: &ForceSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.timestep;

    // Total force per body at time t_n, from the frame-start snapshot
    let mut total = vec![NVec2::zeros(); n];
    forces.accumulate_forces(sys.t, &*sys, &mut total);

    // Anchor distances from the same snapshot, before any position moves
    if let Some(k) = sys.anchor {
        let anchor_x = sys.bodies[k].x;
        for (i, b) in sys.bodies.iter_mut().enumerate() {
            if i != k {
                b.distance_to_anchor = (anchor_x - b.x).norm();
            }
        }
    }

    // Kick: v_n+1 = v_n + dt * F_n / m
    // Drift: x_n+1 = x_n + dt * v_n+1 (the just-updated velocity)
    for (b, f) in sys.bodies.iter_mut().zip(total.iter()) {
        b.v += (*f / b.m) * dt;
        b.x += b.v * dt;
        b.orbit.push(b.x);
    }

    sys.t += dt;
}
