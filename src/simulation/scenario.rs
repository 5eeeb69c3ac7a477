//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the modulated field with its baseline captured
//! - the particle bunch with its initial spread already applied
//!
//! The end time and the default oscillation period both derive from the
//! analytic cyclotron orbit period T = 2 pi m / (|B| q).

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{IntegratorConfig, ScenarioConfig};
use crate::error::SimulationError;
use crate::simulation::engine::Engine;
use crate::simulation::ensemble::Ensemble;
use crate::simulation::fields::ModulatedField;
use crate::simulation::integrator::Integrator;
use crate::simulation::params::Parameters;
use crate::simulation::vector::{from_components, unit_or_zero, Vec3};

/// Analytic period of one cyclotron orbit, T = 2 pi m / (|B| q)
pub fn orbit_period(mass: f64, charge: f64, b_norm: f64) -> f64 {
    2.0 * std::f64::consts::PI * mass / (b_norm * charge)
}

/// Analytic cyclotron orbit radius, r = m |v| / (|B| q)
pub fn orbit_radius(mass: f64, speed: f64, charge: f64, b_norm: f64) -> f64 {
    mass * speed / (b_norm * charge)
}

/// A fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, the field model, and the
/// bunch, ready to be driven by [`crate::simulation::engine::run`].
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub field: ModulatedField,
    pub bunch: Ensemble,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        // Fields: magnitude times normalized direction, as in the config
        let f_cfg = &cfg.field;
        let electric =
            unit_or_zero(&from_components(&f_cfg.electric_direction)?).scale(f_cfg.electric_magnitude);
        let magnetic =
            unit_or_zero(&from_components(&f_cfg.magnetic_direction)?).scale(f_cfg.magnetic_magnitude);
        let divider = from_components(&f_cfg.divider)?;

        let mut field = ModulatedField::new(divider, electric, magnetic, f_cfg.reduction_factor);
        field.capture_baseline();

        // Bunch: runtime vectors from raw coordinate lists
        let b_cfg = &cfg.bunch;
        let position = from_components(&b_cfg.position)?;
        let velocity = from_components(&b_cfg.velocity)?;
        let spread = from_components(&b_cfg.spread)?;

        let integrator = match cfg.engine.integrator {
            IntegratorConfig::Euler => Integrator::Euler,
            IntegratorConfig::EulerCromer => Integrator::EulerCromer,
        };

        let mut bunch = Ensemble::new(
            b_cfg.mass,
            b_cfg.charge,
            position,
            velocity,
            b_cfg.count,
            integrator,
        );

        // Analytic orbit figures set the run duration and the default
        // oscillation period (cyclotron resonance)
        let period_analytic = orbit_period(b_cfg.mass, b_cfg.charge, magnetic.norm());
        if !period_analytic.is_finite() {
            warn!("orbit period is not finite; check charge and magnetic field magnitude");
        }

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            t_end: period_analytic * p_cfg.orbits,
            dt: p_cfg.dt,
            period: p_cfg.period.unwrap_or(period_analytic),
            seed: p_cfg.seed,
        };

        // Initial spread from a seeded RNG so runs are reproducable
        let mut rng = StdRng::seed_from_u64(parameters.seed);
        bunch.randomize_positions(&spread, &mut rng);

        let engine = Engine {
            integrator,
            spatial_gating: cfg.engine.spatial_gating,
        };

        info!(
            "scenario: {} particles, orbit period = {:.6e}, orbit radius = {:.6e}",
            bunch.len(),
            period_analytic,
            orbit_radius(b_cfg.mass, velocity.norm(), b_cfg.charge, magnetic.norm())
        );

        Ok(Self {
            engine,
            parameters,
            field,
            bunch,
        })
    }
}
