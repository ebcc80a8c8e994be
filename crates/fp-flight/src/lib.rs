//! `fp-flight`: per-run flight state and the fuel consumption contract.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`state`]       | `FlightState`: remaining fuel, phase, elevation context    |
//! | [`consumption`] | `ConsumptionModel` trait, `PhaseEstimate`, `AircraftProfile`, `StandardConsumptionModel` |
//! | [`error`]       | `FlightError`, `FlightResult<T>`                           |
//!
//! # Ownership
//!
//! A `FlightState` belongs to exactly one planning run, which mutates it
//! destructively while it evaluates edge costs.  Independent runs over the
//! same flight must each start from their own `clone()`.

pub mod consumption;
pub mod error;
pub mod state;


pub use consumption::{AircraftProfile, ConsumptionModel, PhaseEstimate, StandardConsumptionModel};
pub use error::{FlightError, FlightResult};
pub use state::{FlightPhase, FlightState, DEFAULT_FUEL_FLOOR};
