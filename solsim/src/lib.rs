pub mod error;
pub mod simulation;
pub mod configuration;
pub mod service;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::states::{Body, BodySnapshot, System, NVec3};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT, MAX_SUBSTEP_DAYS, MAX_SUBSTEPS};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::{leapfrog_step, euler_step};
pub use simulation::scenario::{build_initial_state, circular_speed};
pub use simulation::controller::{plan_substeps, AdvanceReport, StepController, SubstepPlan};
pub use simulation::diagnostics::{angular_momentum, linear_momentum, total_energy};

pub use configuration::config::{CentralConfig, ParametersConfig, PlanetConfig, ScenarioConfig};

pub use service::{routes::create_router, server::run_server};

pub use benchmark::benchmark::{bench_advance, bench_drift, bench_gravity};
