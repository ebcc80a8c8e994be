//! High-level planning facade: multi-leg requests, algorithm selection and
//! side-by-side comparison.

use std::fmt;

use tracing::{debug, instrument, warn};

use fp_core::Coordinate;
use fp_flight::{ConsumptionModel, FlightState};
use fp_network::{AirNetwork, Junction};

use crate::{
    assemble, DistanceMetric, FuelMetric, PathPlanner, PlanError, PlanResult, PlannerConfig,
    Route, RouteMetric,
};

// ── FlightRequest ─────────────────────────────────────────────────────────────

/// What to plan: endpoints plus mandatory junctions, flown in listed order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightRequest {
    pub origin:      Coordinate,
    pub destination: Coordinate,
    pub junctions:   Vec<Junction>,
}

impl FlightRequest {
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self { origin, destination, junctions: Vec::new() }
    }

    pub fn with_junction(mut self, junction: Junction) -> Self {
        self.junctions.push(junction);
        self
    }

    /// Origin, every junction point, destination.
    pub fn waypoints(&self) -> Vec<Coordinate> {
        let mut points = Vec::with_capacity(self.junctions.len() + 2);
        points.push(self.origin);
        points.extend(self.junctions.iter().map(|j| j.point()));
        points.push(self.destination);
        points
    }
}

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// Built-in metrics selectable by [`FlightPlanner::plan_with`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    ShortestDistance,
    EfficientConsumption,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::ShortestDistance, Algorithm::EfficientConsumption];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::ShortestDistance     => "shortest_distance",
            Algorithm::EfficientConsumption => "efficient_consumption",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::ShortestDistance     => "Shortest Path",
            Algorithm::EfficientConsumption => "Fuel efficient Path",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── FlightPlanner ─────────────────────────────────────────────────────────────

/// Plans routes over an [`AirNetwork`] with a fixed consumption model and
/// configuration.
pub struct FlightPlanner<M: ConsumptionModel> {
    model:  M,
    config: PlannerConfig,
}

impl<M: ConsumptionModel> FlightPlanner<M> {
    pub fn new(model: M, config: PlannerConfig) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self { model, config })
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan `request` with a caller-supplied metric, mutating `flight`.
    ///
    /// Every waypoint is checked before the first search so an unknown point
    /// leaves `flight` untouched.  Legs share `flight` and `metric` in
    /// sequence; their totals are summed.  A total below the configured
    /// validity threshold is reported as [`PlanError::FailedAnalysis`].
    #[instrument(skip_all, fields(metric = metric.name(), junctions = request.junctions.len()))]
    pub fn plan<R: RouteMetric + ?Sized>(
        &self,
        network: &AirNetwork,
        request: &FlightRequest,
        flight:  &mut FlightState,
        metric:  &mut R,
    ) -> PlanResult<Route> {
        let waypoints = request.waypoints();
        if let Some(&missing) = waypoints.iter().find(|p| !network.contains(**p)) {
            return Err(PlanError::InvalidGraphVertex(missing));
        }

        let result = self.plan_legs(network, request, &waypoints, flight, metric);
        if let Err(PlanError::InsufficientFuel { required, available }) = &result {
            warn!(%required, %available, "run aborted on insufficient fuel");
        }
        result
    }

    fn plan_legs<R: RouteMetric + ?Sized>(
        &self,
        network:   &AirNetwork,
        request:   &FlightRequest,
        waypoints: &[Coordinate],
        flight:    &mut FlightState,
        metric:    &mut R,
    ) -> PlanResult<Route> {
        let mut points   = vec![request.origin];
        let mut segments = Vec::new();
        let mut total    = 0.0;

        for (i, pair) in waypoints.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            if from == to {
                continue;
            }
            let tree = PathPlanner::search(network, from, to, metric, flight, &request.junctions)?;
            let leg  = assemble(network, &tree)?;
            debug!(leg = i, %from, %to, segments = leg.segments.len(), total = leg.total, "leg planned");

            points.extend(leg.points.into_iter().skip(1));
            segments.extend(leg.segments);
            total += leg.total;
        }

        if total < self.config.validity_threshold {
            return Err(PlanError::FailedAnalysis(format!(
                "aggregate {} below validity threshold {}",
                metric.amount(total),
                self.config.validity_threshold
            )));
        }

        Ok(Route {
            algorithm: metric.description(),
            segments,
            points,
            total: metric.amount(total),
            remaining_fuel: flight.current_fuel(),
        })
    }

    /// Plan with a built-in algorithm on a private copy of `flight`.
    ///
    /// The copy gets the configured fuel floor; `flight` itself is never
    /// modified.
    pub fn plan_with(
        &self,
        network:   &AirNetwork,
        request:   &FlightRequest,
        flight:    &FlightState,
        algorithm: Algorithm,
    ) -> PlanResult<Route> {
        let mut flight = flight.clone().with_fuel_floor(self.config.fuel_floor);
        match algorithm {
            Algorithm::ShortestDistance => {
                self.plan(network, request, &mut flight, &mut DistanceMetric)
            }
            Algorithm::EfficientConsumption => {
                self.plan(network, request, &mut flight, &mut FuelMetric::new(&self.model))
            }
        }
    }

    /// Run each algorithm independently, each on its own copy of `flight`.
    ///
    /// A failure in one algorithm does not affect the others.
    pub fn compare(
        &self,
        network:    &AirNetwork,
        request:    &FlightRequest,
        flight:     &FlightState,
        algorithms: &[Algorithm],
    ) -> Vec<(Algorithm, PlanResult<Route>)> {
        algorithms
            .iter()
            .map(|&algorithm| (algorithm, self.plan_with(network, request, flight, algorithm)))
            .collect()
    }
}
