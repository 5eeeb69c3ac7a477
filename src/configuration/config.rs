//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (integrator, spatial gating)
//! - [`ParametersConfig`] – numerical parameters for the run
//! - [`FieldConfig`]      – electromagnetic field and its modulations
//! - [`BunchConfig`]      – the particle bunch's physical properties
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example cyclotron scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   integrator: "euler_cromer"  # or "euler"
//!   spatial_gating: false
//!
//! parameters:
//!   dt: 1.0e-4                  # fixed step size
//!   orbits: 5.0                 # run duration, in analytic orbit periods
//!   seed: 42                    # deterministic seed for the initial spread
//!   # period: 0.5               # oscillation period; analytic orbit period if omitted
//!
//! field:
//!   electric_magnitude: 1.0e-7
//!   electric_direction: [0.0, 1.0, 0.0]
//!   magnetic_magnitude: 1.0e-7
//!   magnetic_direction: [0.0, 0.0, 1.0]
//!   divider: [0.0, 0.0, 0.0]    # x threshold for spatial gating
//!   reduction_factor: 1.0       # magnetic scale beyond the divider
//!
//! bunch:
//!   mass: 1.67e-27
//!   charge: 1.60e-19
//!   count: 100
//!   position: [0.0, 0.0, 0.0]
//!   velocity: [0.1, 0.0, 0.0]
//!   spread: [0.01, 0.0, 0.0]
//! ```
//!
//! Coordinate lists may have two components (z is taken as zero) or three;
//! any other length is rejected when the runtime scenario is built.

use serde::Deserialize;

/// Which integration scheme advances the bunch
/// `integrator: "euler"` or `integrator: "euler_cromer"`
#[derive(Deserialize, Debug, Clone)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")] // Explicit Euler, position updated from the pre-step velocity
    Euler,

    #[serde(rename = "euler_cromer")] // Semi-implicit Euler–Cromer, velocity updated first; far better energy behavior for orbits
    EulerCromer,
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // time integrator used for advancing the bunch
    pub spatial_gating: bool, // `true` - gate the magnetic field on the bunch average position each step
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,             // time step size
    pub orbits: f64,         // run duration in analytic orbit periods
    pub seed: u64,           // deterministic seed to make runs reproducable
    pub period: Option<f64>, // electric oscillation period; analytic orbit period if omitted
}

/// Electromagnetic field configuration
/// Each field is given as magnitude times a direction vector; the direction
/// is normalized when the runtime scenario is built
#[derive(Deserialize, Debug)]
pub struct FieldConfig {
    pub electric_magnitude: f64,      // |E|
    pub electric_direction: Vec<f64>, // direction of E
    pub magnetic_magnitude: f64,      // |B|
    pub magnetic_direction: Vec<f64>, // direction of B
    pub divider: Vec<f64>,            // spatial gating threshold, x is the gated axis
    pub reduction_factor: f64,        // magnetic scale beyond the divider
}

/// Configuration for the particle bunch's initial state
#[derive(Deserialize, Debug)]
pub struct BunchConfig {
    pub mass: f64,          // mass of each particle
    pub charge: f64,        // charge of each particle
    pub count: usize,       // number of particles in the bunch
    pub position: Vec<f64>, // shared initial position
    pub velocity: Vec<f64>, // shared initial velocity
    pub spread: Vec<f64>,   // per-axis bound on the randomized initial offset
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration (integrator, gating)
    pub parameters: ParametersConfig, // global numerical parameters
    pub field: FieldConfig, // electromagnetic field and modulations
    pub bunch: BunchConfig, // particle bunch initial state
}
