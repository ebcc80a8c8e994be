//! `fp-core`: foundational types for the flightplan route-planning engine.
//!
//! This crate is a dependency of every other `fp-*` crate.  It has no `fp-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `NodeId`, `EdgeId`, `SegmentId`                       |
//! | [`geo`]      | `Coordinate`, haversine distance, initial bearing     |
//! | [`quantity`] | `Meters`, `Kilograms`, `Amount`                       |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod quantity;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Coordinate;
pub use ids::{EdgeId, NodeId, SegmentId};
pub use quantity::{Amount, Kilograms, Meters};
