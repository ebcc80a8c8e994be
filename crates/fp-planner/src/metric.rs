//! Route metrics: the edge-cost strategies plugged into [`PathPlanner`](crate::PathPlanner).
//!
//! # Pluggability
//!
//! The engine owns the relaxation loop; a [`RouteMetric`] only prices
//! edges.  Metrics may be stateful and may mutate the flight state while
//! pricing (see [`FuelMetric`](crate::FuelMetric)), so every hook receives
//! the run's [`MetricContext`] mutably and may abort the run with an error.

use fp_core::{Amount, EdgeId, Meters, NodeId};
use fp_flight::FlightState;
use fp_network::{AirNetwork, Junction};

use crate::PlanResult;

/// Everything a metric may consult or mutate during one search.
pub struct MetricContext<'a> {
    pub network:   &'a AirNetwork,
    pub flight:    &'a mut FlightState,
    pub junctions: &'a [Junction],
}

/// Edge-cost strategy for the path planner.
///
/// Hooks are called in this order for one leg:
///
/// 1. `begin` once, before the origin is visited.
/// 2. For each visited vertex, `edge_cost` for every outgoing edge, in
///    adjacency order.
/// 3. `on_select` for the next frontier vertex, with its tentative total.
pub trait RouteMetric {
    /// Short machine-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Human-readable description of what the metric minimizes.
    fn description(&self) -> &'static str;

    fn begin(&mut self, _ctx: &mut MetricContext<'_>) -> PlanResult<()> {
        Ok(())
    }

    /// Cost of traversing `edge` from its origin.  Must be non-negative.
    fn edge_cost(&mut self, ctx: &mut MetricContext<'_>, edge: EdgeId) -> PlanResult<f64>;

    fn on_select(
        &mut self,
        _ctx:      &mut MetricContext<'_>,
        _node:     NodeId,
        _distance: f64,
    ) -> PlanResult<()> {
        Ok(())
    }

    /// Tag a raw total with the metric's physical unit.
    fn amount(&self, total: f64) -> Amount;
}

// ── DistanceMetric ────────────────────────────────────────────────────────────

/// Classic shortest path: cost = static edge weight (segment length).
///
/// Pure and path-independent, so the usual Dijkstra guarantees hold.
#[derive(Copy, Clone, Debug, Default)]
pub struct DistanceMetric;

impl RouteMetric for DistanceMetric {
    fn name(&self) -> &'static str {
        "distance"
    }

    fn description(&self) -> &'static str {
        "Shortest Path"
    }

    #[inline]
    fn edge_cost(&mut self, ctx: &mut MetricContext<'_>, edge: EdgeId) -> PlanResult<f64> {
        Ok(ctx.network.edge_weight(edge))
    }

    fn amount(&self, total: f64) -> Amount {
        Amount::Length(Meters::new(total))
    }
}
