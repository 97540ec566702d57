//! Build fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//!
//! The same bundle can be built without a config file from the compiled-in
//! solar-system roster. Scenarios are inserted into Bevy as `Resource`s and
//! consumed by the integration and visualization systems

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle": parameters, current system state,
/// and the set of active force laws. In Bevy terms it is inserted as a
/// `Resource` and then read by the physics and rendering systems
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                Body::new(
                    NVec2::new(bc.x[0], bc.x[1]),
                    NVec2::new(bc.v[0], bc.v[1]),
                    bc.m,
                    bc.radius,
                    bc.color,
                )
            })
            .collect();

        // Resolve the anchor once: the last flagged body wins, matching
        // per-body flag semantics when a config marks more than one
        let anchor = cfg.bodies.iter().rposition(|bc| bc.anchor);

        // Initial system state: bodies at t = 0
        let system = System {
            bodies,
            anchor,
            t: 0.0,
        };

        let p = cfg.parameters;
        let parameters = Parameters {
            g: p.g,
            timestep: p.timestep,
            scale: p.scale,
        };

        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity { g: parameters.g });

        Self {
            parameters,
            system,
            forces,
        }
    }

    /// The compiled-in roster: the Sun plus the five inner-to-Jupiter
    /// planets, at the demo's stylized offsets and tangential velocities.
    /// The Sun is the anchor; everything uses the default `Parameters`.
    pub fn solar_system() -> Self {
        let sun = Body::new(
            NVec2::zeros(),
            NVec2::zeros(),
            1.98892e30,
            43.0,
            [1.0, 0.8, 0.0],
        );
        let mercury = Body::new(
            NVec2::new(-0.970 * AU, 0.0),
            NVec2::new(0.0, -30.4e3),
            3.30e24,
            8.0,
            [0.647, 0.165, 0.165],
        );
        let venus = Body::new(
            NVec2::new(-1.500 * AU, 0.0),
            NVec2::new(0.0, -25.42e3),
            4.8685e24,
            14.0,
            [1.0, 1.0, 0.878],
        );
        let earth = Body::new(
            NVec2::new(-2.270 * AU, 0.0),
            NVec2::new(0.0, 20.783e3),
            5.9742e24,
            16.0,
            [0.392, 0.584, 0.929],
        );
        let mars = Body::new(
            NVec2::new(-3.300 * AU, 0.0),
            NVec2::new(0.0, 16.483e3),
            6.39e23,
            12.0,
            [0.647, 0.165, 0.165],
        );
        let jupiter = Body::new(
            NVec2::new(-4.800 * AU, 0.0),
            NVec2::new(0.0, 13.283e3),
            3.30e24,
            30.0,
            [1.0, 0.647, 0.0],
        );

        let parameters = Parameters::default();
        let forces = ForceSet::new().with(NewtonianGravity { g: parameters.g });

        Self {
            parameters,
            system: System {
                bodies: vec![sun, mercury, venus, earth, mars, jupiter],
                anchor: Some(0),
                t: 0.0,
            },
            forces,
        }
    }
}
