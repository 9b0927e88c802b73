//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while running a simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Vessel error: {0}")]
    Vessel(#[from] oar_core::OarError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
