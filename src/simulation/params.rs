//! Numerical parameters for a simulation run
//!
//! `Parameters` holds runtime settings:
//! - integration step size and end time,
//! - electric oscillation period,
//! - random seed for the initial bunch spread

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub dt: f64, // step size
    pub period: f64, // electric oscillation period
    pub seed: u64, // deterministic seed
}
