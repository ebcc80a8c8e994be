//! Network construction error type.

use thiserror::Error;

use fp_core::{Coordinate, SegmentId};

/// Errors produced while assembling an [`AirNetwork`](crate::AirNetwork).
#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("point {0} is not a vertex of the network")]
    UnknownVertex(Coordinate),

    #[error("segment {0} not found in network")]
    UnknownSegment(SegmentId),

    #[error("edge weight {0} is negative or not finite")]
    InvalidWeight(f64),

    #[error("an edge from {from} to {to} already exists")]
    DuplicateEdge { from: Coordinate, to: Coordinate },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
