//! Electromagnetic field models for the charged-particle engine
//!
//! Defines the acceleration seam and two field models:
//! - [`UniformField`], a constant electric plus magnetic field
//! - [`ModulatedField`], which adds spatial gating of the magnetic field
//!   and a time-oscillating electric field
//!
//! Field models read charge, mass and velocity from the particle and hand
//! back the Lorentz acceleration; the particle itself stays passive.

use crate::error::SimulationError;
use crate::simulation::states::ChargedParticle;
use crate::simulation::vector::Vec3;

/// Trait for field models that accelerate charged particles
/// Implementations cache their most recent evaluation for inspection;
/// integration consumes the returned value directly
pub trait LorentzField {
    fn acceleration(&mut self, particle: &ChargedParticle) -> Result<Vec3, SimulationError>;
}

/// Uniform electromagnetic field
/// a = (q/m) * (E + v x B), non-relativistic
#[derive(Debug, Clone)]
pub struct UniformField {
    pub electric: Vec3, // electric field strength E
    pub magnetic: Vec3, // magnetic flux density B
    pub last_acceleration: Vec3, // most recent evaluation, for inspection only
}

impl UniformField {
    pub fn new(electric: Vec3, magnetic: Vec3) -> Self {
        Self {
            electric,
            magnetic,
            last_acceleration: Vec3::zeros(),
        }
    }
}

impl LorentzField for UniformField {
    fn acceleration(&mut self, particle: &ChargedParticle) -> Result<Vec3, SimulationError> {
        let m = particle.state.m;
        if m == 0.0 {
            // q/m is undefined; fail loudly rather than produce infinities
            return Err(SimulationError::ZeroMass);
        }

        let a = (self.electric + particle.state.v.cross(&self.magnetic)) * (particle.q / m);
        self.last_acceleration = a;
        Ok(a)
    }
}

// =========================================================================================
// Modulated field below
// =========================================================================================

/// Uniform field with two independent modulations, both keyed off a saved
/// baseline so repeated calls never compound:
/// - spatial gating scales the magnetic field beyond an x-axis divider
/// - temporal oscillation scales the electric field by sin(2 pi t / T)
///
/// Neither modulation runs implicitly. The stepping loop calls
/// [`ModulatedField::capture_baseline`] once before the run, then sequences
/// [`ModulatedField::gate_magnetic`] and
/// [`ModulatedField::oscillate_electric`] itself, once per step.
#[derive(Debug, Clone)]
pub struct ModulatedField {
    pub field: UniformField, // the live field, consumed by acceleration
    pub divider: Vec3, // per-axis gating threshold (x is the gated axis)
    pub reduction_factor: f64, // magnetic scale beyond the divider
    baseline_electric: Vec3,
    baseline_magnetic: Vec3,
}

impl ModulatedField {
    /// Build from the unmodulated field values. The baselines start equal
    /// to the live field; call [`capture_baseline`](Self::capture_baseline)
    /// again if the live field is edited before the run.
    pub fn new(divider: Vec3, electric: Vec3, magnetic: Vec3, reduction_factor: f64) -> Self {
        Self {
            field: UniformField::new(electric, magnetic),
            divider,
            reduction_factor,
            baseline_electric: electric,
            baseline_magnetic: magnetic,
        }
    }

    /// Snapshot the current live field as the baseline for every later
    /// modulation. Call once, before the stepping loop starts.
    pub fn capture_baseline(&mut self) {
        self.baseline_electric = self.field.electric;
        self.baseline_magnetic = self.field.magnetic;
    }

    /// Spatial gating on the x axis. Beyond the divider the live magnetic
    /// field is the baseline scaled by the reduction factor; at or below it
    /// the live field is the unscaled baseline. Always recomputed from the
    /// baseline, so calling this any number of times per step is safe.
    pub fn gate_magnetic(&mut self, position: &Vec3) {
        if position.x > self.divider.x {
            self.field.magnetic = self.baseline_magnetic.scale(self.reduction_factor);
        } else {
            self.field.magnetic = self.baseline_magnetic;
        }
    }

    /// Oscillating electric field E(t) = E_0 * sin(2 pi t / period),
    /// recomputed from the baseline on every call
    pub fn oscillate_electric(&mut self, t: f64, period: f64) {
        let phase = 2.0 * std::f64::consts::PI * t / period;
        self.field.electric = self.baseline_electric.scale(phase.sin());
    }

    pub fn electric(&self) -> Vec3 {
        self.field.electric
    }

    pub fn magnetic(&self) -> Vec3 {
        self.field.magnetic
    }
}

impl LorentzField for ModulatedField {
    fn acceleration(&mut self, particle: &ChargedParticle) -> Result<Vec3, SimulationError> {
        self.field.acceleration(particle)
    }
}
