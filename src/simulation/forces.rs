//! Force contributors for the n-body engine
//!
//! Defines the [`Force`] trait for sources that add their contribution
//! into a per-body force buffer, plus direct pairwise Newtonian gravity

use crate::simulation::states::{NVec2, System};

/// Collection of force terms
/// Each term implements [`Force`] and their contributions are summed
/// into a single total-force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(t, sys, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct pairwise Newtonian gravity, unsoftened
///
/// Evaluates each unordered pair once via [`Body::attraction`] and applies
/// the result equal-and-opposite, so Newton's third law holds exactly.
/// A zero separation is a configuration error and is not guarded.
///
/// [`Body::attraction`]: crate::simulation::states::Body::attraction
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Force for NewtonianGravity {
    fn force(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 {
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];

                // Force on body i from body j, pointing toward j
                let f = bi.attraction(bj, self.g);

                // Body j feels the same pull in the opposite direction
                out[i] += f;
                out[j] -= f;
            }
        }
    }
}
