//! Bunch of charged particles advanced against a shared field
//!
//! An [`Ensemble`] owns a fixed-size collection of [`ChargedParticle`]s
//! plus the bunch-level operations: randomized initial spread, synchronized
//! time-step update, and average-position computation. The ensemble is not
//! itself a particle; it only composes them.

use rand::Rng;

use crate::error::SimulationError;
use crate::simulation::fields::LorentzField;
use crate::simulation::integrator::Integrator;
use crate::simulation::states::ChargedParticle;
use crate::simulation::vector::Vec3;

#[derive(Debug, Clone)]
pub struct Ensemble {
    pub particles: Vec<ChargedParticle>, // fixed size, set at construction
    pub integrator: Integrator, // scheme applied to every member
    base_position: Vec3, // shared origin for randomized offsets
    average: Vec3, // cached mean position
}

impl Ensemble {
    /// Bunch of `count` identical particles, all starting at `position`
    /// with `velocity`
    pub fn new(
        mass: f64,
        charge: f64,
        position: Vec3,
        velocity: Vec3,
        count: usize,
        integrator: Integrator,
    ) -> Self {
        let particles = (0..count)
            .map(|_| ChargedParticle::new(mass, charge, position, velocity))
            .collect();

        Self {
            particles,
            integrator,
            base_position: position,
            average: position,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Scatter the members around the shared base position. Each member
    /// draws an independent uniform scalar in [-1, 1] per axis, so every
    /// final position lies within [base - spread, base + spread]
    /// componentwise. The RNG is injected so runs are repeatable.
    pub fn randomize_positions<R: Rng>(&mut self, spread: &Vec3, rng: &mut R) {
        for p in &mut self.particles {
            let offset = Vec3::new(
                spread.x * rng.gen_range(-1.0..=1.0),
                spread.y * rng.gen_range(-1.0..=1.0),
                spread.z * rng.gen_range(-1.0..=1.0),
            );
            p.state.x = self.base_position + offset;
        }
    }

    /// Advance every member by one time step against the shared field,
    /// in index order. The field evaluates each member's acceleration from
    /// its own velocity, charge and mass, then the selected integrator
    /// applies it. Members never interact, so the order does not affect
    /// the numerical result.
    pub fn advance<F: LorentzField>(
        &mut self,
        dt: f64,
        field: &mut F,
    ) -> Result<(), SimulationError> {
        for p in &mut self.particles {
            let accel = field.acceleration(p)?;
            self.integrator.step(&mut p.state, dt, accel);
        }
        Ok(())
    }

    /// Componentwise arithmetic mean of all member positions. The result is
    /// cached on the bunch. An empty bunch has no average; reporting zero
    /// would silently mask a configuration bug.
    pub fn average_position(&mut self) -> Result<Vec3, SimulationError> {
        if self.particles.is_empty() {
            return Err(SimulationError::EmptyBunch);
        }

        let mut sum = Vec3::zeros();
        for p in &self.particles {
            sum += p.state.x;
        }

        self.average = sum / self.particles.len() as f64;
        Ok(self.average)
    }

    /// Most recently computed average, without recomputing
    pub fn last_average(&self) -> Vec3 {
        self.average
    }
}
