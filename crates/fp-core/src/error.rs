//! Core error type.
//!
//! Each `fp-*` crate keeps its own error enum; this one only covers the
//! value types defined here.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinate (lat {lat}, lon {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

pub type CoreResult<T> = Result<T, CoreError>;
