//! Error types for the simulation core
//!
//! Every failure is fatal to the operation that raised it; the core never
//! retries. The driver decides whether a failed run is abandoned.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("expected 2 or 3 vector components, got {got}")]
    InvalidComponents { got: usize },

    #[error("zero mass in Lorentz force evaluation")]
    ZeroMass,

    #[error("average position of an empty bunch is undefined")]
    EmptyBunch,

    #[error("failed to write trajectory record")]
    Io(#[from] std::io::Error),
}
