//! Core state types for the solar-system simulation.
//!
//! `Body` is a single gravitating point mass together with its display
//! attributes and orbit trail; `System` holds the full body list, the
//! index of the anchor body (the star), and the current simulation time.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position, meters
    pub v: NVec2, // velocity, m/s
    pub m: f64, // mass, kg
    pub radius: f64, // draw radius, pixels (not used by physics)
    pub color: [f32; 3], // display color, rgb in 0..1
    pub distance_to_anchor: f64, // last-computed distance to the anchor, meters
    pub orbit: Vec<NVec2>, // trail of past positions, one entry per step
}

impl Body {
    /// A body at the given position and velocity with an empty orbit trail.
    pub fn new(x: NVec2, v: NVec2, m: f64, radius: f64, color: [f32; 3]) -> Self {
        Self {
            x,
            v,
            m,
            radius,
            color,
            distance_to_anchor: 0.0,
            orbit: Vec::new(),
        }
    }

    /// Gravitational force exerted on `self` by `other`, in newtons.
    ///
    /// `F = g m1 m2 / d^2`, decomposed along the line connecting the two
    /// bodies with `theta = atan2(dy, dx)` so the resulting vector points
    /// from `self` toward `other`.
    ///
    /// Undefined (division by zero) when both bodies share a position;
    /// the fixed, non-colliding rosters never trigger that.
    pub fn attraction(&self, other: &Body, g: f64) -> NVec2 {
        let d = other.x - self.x;
        let distance = d.norm();

        let force = g * self.m * other.m / (distance * distance);
        let theta = d.y.atan2(d.x);
        NVec2::new(theta.cos() * force, theta.sin() * force)
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, draw order = insertion order
    pub anchor: Option<usize>, // index of the reference body whose distance is tracked
    pub t: f64, // time, seconds
}
