//! `fp-network`: air-route network, segments, and junction classification.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`network`]  | `AirNetwork` (CSR + R-tree), `AirNetworkBuilder`         |
//! | [`segment`]  | `Segment`, `Wind`                                        |
//! | [`junction`] | `Junction`, `is_technical_stop`                          |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod error;
pub mod junction;
pub mod network;
pub mod segment;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use junction::{is_technical_stop, Junction};
pub use network::{AirNetwork, AirNetworkBuilder};
pub use segment::{Segment, Wind};
