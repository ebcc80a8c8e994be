use fp_core::Kilograms;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FlightError {
    #[error("insufficient fuel: {required} required, {available} on board")]
    InsufficientFuel {
        required:  Kilograms,
        available: Kilograms,
    },

    #[error("invalid aircraft profile: {0}")]
    InvalidProfile(String),
}

pub type FlightResult<T> = Result<T, FlightError>;
