//! Core state types for the charged-particle simulation
//!
//! Defines the kinematic state and the charged particle built on it:
//! - `ParticleState` holds mass plus position/velocity/acceleration
//! - `ChargedParticle` adds the scalar charge
//!
//! Particles are passive data holders. Forces are evaluated by the field
//! model and integration is applied from the outside; the stored
//! acceleration is only a record of the last value that was applied.

use crate::simulation::vector::Vec3;

#[derive(Debug, Clone)]
pub struct ParticleState {
    pub m: f64, // mass
    pub x: Vec3, // position
    pub v: Vec3, // velocity
    pub a: Vec3, // last applied acceleration
}

impl ParticleState {
    /// State with the given mass, position and velocity; acceleration
    /// starts at zero until a field evaluation supplies one
    pub fn new(m: f64, x: Vec3, v: Vec3) -> Self {
        Self {
            m,
            x,
            v,
            a: Vec3::zeros(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChargedParticle {
    pub q: f64, // charge
    pub state: ParticleState,
}

impl ChargedParticle {
    pub fn new(m: f64, q: f64, x: Vec3, v: Vec3) -> Self {
        Self {
            q,
            state: ParticleState::new(m, x, v),
        }
    }
}
