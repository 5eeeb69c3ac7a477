pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::vector::{from_components, unit_or_zero, Vec3, UNIT_EPS};
pub use simulation::states::{ParticleState, ChargedParticle};
pub use simulation::fields::{LorentzField, UniformField, ModulatedField};
pub use simulation::integrator::{euler_step, euler_cromer_step, Integrator};
pub use simulation::ensemble::Ensemble;
pub use simulation::params::Parameters;
pub use simulation::engine::{run, Engine};
pub use simulation::scenario::{orbit_period, orbit_radius, Scenario};

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, FieldConfig, BunchConfig, ScenarioConfig};

pub use error::SimulationError;

pub use benchmark::benchmark::{bench_advance, bench_advance_curve};
