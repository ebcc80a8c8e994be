//! Fuel-aware route metric.
//!
//! The cost of an edge is the fuel burned flying it:
//!
//! ```text
//! cost = climb + cruise(weight − climb_dist − descent_dist) + descent   [kg]
//! ```
//!
//! Climb figures are computed at the start of every leg and again whenever
//! a technical stop is selected.  Descent figures start each leg at zero and
//! are recomputed whenever an edge ends at a technical stop; between those
//! points both are carried over unchanged.
//!
//! # Side effects
//!
//! Pricing an edge burns the climb fuel on the flight state before the
//! cruise is estimated, so the cruise estimate sees a lighter aircraft.
//! Selecting a frontier vertex resets the fuel on board to
//! `leg start − tentative total`.  Either step fails the run with
//! `InsufficientFuel` once the fuel floor would be crossed.  The burn is
//! therefore path- and order-dependent.

use fp_core::{Amount, EdgeId, Kilograms, Meters, NodeId};
use fp_flight::{ConsumptionModel, FlightPhase, PhaseEstimate};
use fp_network::is_technical_stop;

use crate::{MetricContext, PlanError, PlanResult, RouteMetric};

/// Fuel-minimizing [`RouteMetric`] backed by a [`ConsumptionModel`].
///
/// Every search starts from fresh climb and descent figures, so one
/// instance can price any number of legs or requests.
pub struct FuelMetric<'m, M: ConsumptionModel> {
    model:     &'m M,
    leg_start: Kilograms,
    climb:     PhaseEstimate,
    descent:   PhaseEstimate,
}

impl<'m, M: ConsumptionModel> FuelMetric<'m, M> {
    pub fn new(model: &'m M) -> Self {
        Self {
            model,
            leg_start: Kilograms::ZERO,
            climb:     PhaseEstimate::default(),
            descent:   PhaseEstimate::default(),
        }
    }

    /// Climb figures currently added to every edge.
    pub fn climb(&self) -> PhaseEstimate {
        self.climb
    }

    /// Descent figures currently added to every edge.
    pub fn descent(&self) -> PhaseEstimate {
        self.descent
    }

    fn recompute_climb(&mut self, ctx: &mut MetricContext<'_>) {
        ctx.flight.set_phase(FlightPhase::Climb);
        self.climb = self.model.climb(ctx.flight, ctx.flight.origin_elevation());
    }
}

impl<M: ConsumptionModel> RouteMetric for FuelMetric<'_, M> {
    fn name(&self) -> &'static str {
        "fuel"
    }

    fn description(&self) -> &'static str {
        "Fuel efficient Path"
    }

    fn begin(&mut self, ctx: &mut MetricContext<'_>) -> PlanResult<()> {
        self.leg_start = ctx.flight.current_fuel();
        self.descent   = PhaseEstimate::default();
        self.recompute_climb(ctx);
        Ok(())
    }

    fn edge_cost(&mut self, ctx: &mut MetricContext<'_>, edge: EdgeId) -> PlanResult<f64> {
        let network = ctx.network;
        let from = network.point(network.edge_origin(edge));
        let to   = network.point(network.edge_destination(edge));
        let segment = network
            .segment(network.edge_segment_id(edge))
            .ok_or_else(|| PlanError::FailedAnalysis(format!("edge {edge} has no segment")))?;

        if is_technical_stop(to, ctx.junctions) {
            ctx.flight.set_phase(FlightPhase::Descent);
            self.descent = self.model.descent(ctx.flight, ctx.flight.destination_elevation());
        }

        let cruise_distance = Meters::new(network.edge_weight(edge))
            - (self.climb.distance + self.descent.distance);
        let virtual_distance =
            self.model.virtual_distance(cruise_distance, ctx.flight, segment, from, to);

        ctx.flight.consume(self.climb.consumption)?;
        ctx.flight.set_phase(FlightPhase::Cruise);
        let cruise = self.model.cruise(ctx.flight, virtual_distance);

        let cost = self.climb.consumption + cruise.consumption + self.descent.consumption;
        Ok(cost.value())
    }

    fn on_select(
        &mut self,
        ctx:      &mut MetricContext<'_>,
        node:     NodeId,
        distance: f64,
    ) -> PlanResult<()> {
        ctx.flight.settle(self.leg_start, Kilograms::new(distance))?;
        if is_technical_stop(ctx.network.point(node), ctx.junctions) {
            self.recompute_climb(ctx);
        }
        Ok(())
    }

    fn amount(&self, total: f64) -> Amount {
        Amount::Mass(Kilograms::new(total))
    }
}
