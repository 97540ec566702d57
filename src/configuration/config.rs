//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario: optional numerical parameters plus the initial state of each
//! body. Omitted parameters fall back to the solar-system constants in
//! [`params`](crate::simulation::params).
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   g: 6.67428e-11         # gravitational constant
//!   timestep: 86400.0      # one day of simulated time per frame
//!   scale: 4.6791e-10      # 70 px per AU
//!
//! bodies:
//!   - x: [ 0.0, 0.0 ]      # position, meters
//!     v: [ 0.0, 0.0 ]      # velocity, m/s
//!     m: 1.98892e30        # mass, kg
//!     radius: 43.0         # draw radius, pixels
//!     color: [ 1.0, 0.8, 0.0 ]
//!     anchor: true         # reference body for distance tracking
//!   - x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29.783e3 ]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [ 0.39, 0.58, 0.93 ]
//! ```

use serde::Deserialize;

use crate::simulation::params::{G, SCALE, TIMESTEP};

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub g: f64,        // gravitational constant
    pub timestep: f64, // simulated seconds advanced per frame
    pub scale: f64,    // meters-to-pixels factor for rendering
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: G,
            timestep: TIMESTEP,
            scale: SCALE,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2],     // initial position, meters
    pub v: [f64; 2],     // initial velocity, m/s
    pub m: f64,          // mass, kg
    pub radius: f64,     // draw radius, pixels
    pub color: [f32; 3], // display color, rgb in 0..1
    #[serde(default)]
    pub anchor: bool, // marks the reference body; the last flagged body wins
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state
}
