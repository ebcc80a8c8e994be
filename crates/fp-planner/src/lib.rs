//! `fp-planner`: route planning over an [`AirNetwork`](fp_network::AirNetwork).
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`engine`]   | `PathPlanner` (modified Dijkstra), `SearchTree` working set     |
//! | [`metric`]   | `RouteMetric` trait, `MetricContext`, `DistanceMetric`          |
//! | [`fuel`]     | `FuelMetric`, fuel-aware stateful edge cost                     |
//! | [`assemble`] | parent-pointer walk → ordered segments                          |
//! | [`route`]    | `Route`, `Leg`                                                  |
//! | [`planner`]  | `FlightPlanner`, `FlightRequest`, `Algorithm`                   |
//! | [`config`]   | `PlannerConfig`                                                 |
//! | [`error`]    | `PlanError`, `PlanResult<T>`                                    |
//!
//! # Flow
//!
//! ```text
//! FlightPlanner::plan(request)
//!   for each leg (origin → junction … → destination):
//!     PathPlanner::search(metric)   relaxation; metric may burn fuel
//!     assemble(tree)                parents → segments
//!   sum legs → Route { segments, total: Amount }
//! ```
//!
//! Every call runs synchronously to completion or to the first error.  The
//! flight state handed to [`FlightPlanner::plan`] is mutated; use
//! [`FlightPlanner::plan_with`] or [`FlightPlanner::compare`] to work on
//! fresh copies.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `PlannerConfig`.        |

pub mod assemble;
pub mod config;
pub mod engine;
pub mod error;
pub mod fuel;
pub mod metric;
pub mod planner;
pub mod route;


pub use assemble::assemble;
pub use config::PlannerConfig;
pub use engine::{PathPlanner, SearchTree};
pub use error::{PlanError, PlanResult};
pub use fuel::FuelMetric;
pub use metric::{DistanceMetric, MetricContext, RouteMetric};
pub use planner::{Algorithm, FlightPlanner, FlightRequest};
pub use route::{Leg, Route};
