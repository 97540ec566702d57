pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::euler_cromer_step;
pub use simulation::params::{Parameters, AU, G, SCALE, TIMESTEP};
pub use simulation::projection::{screen_to_sim, sim_to_screen};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use visualization::viewer::run_viewer;
