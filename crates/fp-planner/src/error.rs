//! Planning error type.

use thiserror::Error;

use fp_core::{Coordinate, Kilograms};
use fp_flight::FlightError;

/// Errors that end a planning call.  None of them is retried internally and
/// no partial route accompanies them.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error("point {0} is not a vertex of the air network")]
    InvalidGraphVertex(Coordinate),

    #[error("insufficient fuel: {required} required, {available} on board")]
    InsufficientFuel {
        required:  Kilograms,
        available: Kilograms,
    },

    #[error("failed analysis: {0}")]
    FailedAnalysis(String),

    #[error("planner configuration error: {0}")]
    Config(String),
}

impl From<FlightError> for PlanError {
    fn from(err: FlightError) -> Self {
        match err {
            FlightError::InsufficientFuel { required, available } => {
                PlanError::InsufficientFuel { required, available }
            }
            FlightError::InvalidProfile(msg) => PlanError::Config(msg),
        }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
