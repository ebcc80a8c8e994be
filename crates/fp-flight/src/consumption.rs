//! Fuel consumption contract and a reference implementation.
//!
//! The planner only depends on the [`ConsumptionModel`] trait: given the
//! current [`FlightState`] and a phase, a model returns the horizontal
//! distance covered and the fuel burned.  Real deployments plug in their
//! aircraft-performance library here.
//!
//! [`StandardConsumptionModel`] is a deliberately simple model driven by an
//! [`AircraftProfile`]:
//!
//! | Phase   | Duration                                   | Burn                       |
//! |---------|--------------------------------------------|----------------------------|
//! | Climb   | (cruise altitude − elevation) / climb rate | climb flow × duration      |
//! | Cruise  | air distance / true airspeed               | cruise flow × duration     |
//! | Descent | (cruise altitude − elevation) / sink rate  | descent flow × duration    |
//!
//! Every flow is scaled by `gross mass / reference mass`, so the burn of a
//! leg depends on how much fuel is still on board.

use fp_core::{Coordinate, Kilograms, Meters};
use fp_network::Segment;

use crate::{FlightError, FlightResult, FlightState};

/// Ground speeds below this are treated as this, so a headwind stronger
/// than the airspeed yields a huge but finite air distance.
const MIN_GROUND_SPEED_MPS: f64 = 1.0;

/// Outcome of one flight phase.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PhaseEstimate {
    /// Horizontal distance covered during the phase.
    pub distance: Meters,
    /// Fuel burned during the phase.
    pub consumption: Kilograms,
}

/// Physics contract consumed by the fuel-aware route metric.
///
/// Implementations must be pure with respect to their inputs: the planner
/// owns all mutation of the flight state.
pub trait ConsumptionModel {
    /// Climb from `elevation` to cruise altitude.
    fn climb(&self, flight: &FlightState, elevation: Meters) -> PhaseEstimate;

    /// Descent from cruise altitude to `elevation`.
    fn descent(&self, flight: &FlightState, elevation: Meters) -> PhaseEstimate;

    /// Air distance equivalent of flying `cruise_distance` over `segment`
    /// from `from` to `to`, accounting for the segment's wind.
    fn virtual_distance(
        &self,
        cruise_distance: Meters,
        flight:          &FlightState,
        segment:         &Segment,
        from:            Coordinate,
        to:              Coordinate,
    ) -> Meters;

    /// Cruise over `virtual_distance` of air.
    fn cruise(&self, flight: &FlightState, virtual_distance: Meters) -> PhaseEstimate;
}

// ── AircraftProfile ───────────────────────────────────────────────────────────

/// Performance figures of one aircraft type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AircraftProfile {
    pub name: String,
    /// Operating empty mass.
    pub empty_mass: Kilograms,
    /// Cargo, passengers and crew.
    pub payload: Kilograms,
    /// Gross mass at which the fuel flows below are quoted.
    pub reference_mass: Kilograms,
    pub cruise_altitude: Meters,
    pub true_airspeed_mps: f64,
    pub climb_rate_mps: f64,
    pub climb_ground_speed_mps: f64,
    pub descent_rate_mps: f64,
    pub descent_ground_speed_mps: f64,
    pub climb_fuel_flow_kgps: f64,
    pub cruise_fuel_flow_kgps: f64,
    pub descent_fuel_flow_kgps: f64,
}

impl Default for AircraftProfile {
    /// A generic narrow-body twin.
    fn default() -> Self {
        Self {
            name:                     "generic narrow-body".to_string(),
            empty_mass:               Kilograms::new(42_000.0),
            payload:                  Kilograms::new(12_000.0),
            reference_mass:           Kilograms::new(65_000.0),
            cruise_altitude:          Meters::new(11_000.0),
            true_airspeed_mps:        230.0,
            climb_rate_mps:           12.0,
            climb_ground_speed_mps:   140.0,
            descent_rate_mps:         10.0,
            descent_ground_speed_mps: 160.0,
            climb_fuel_flow_kgps:     1.4,
            cruise_fuel_flow_kgps:    0.7,
            descent_fuel_flow_kgps:   0.25,
        }
    }
}

impl AircraftProfile {
    /// Reject non-positive speeds, rates and masses.
    pub fn validate(&self) -> FlightResult<()> {
        let positive = [
            ("reference_mass", self.reference_mass.value()),
            ("true_airspeed_mps", self.true_airspeed_mps),
            ("climb_rate_mps", self.climb_rate_mps),
            ("descent_rate_mps", self.descent_rate_mps),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(FlightError::InvalidProfile(format!("{field} must be positive, got {value}")));
            }
        }
        let non_negative = [
            ("empty_mass", self.empty_mass.value()),
            ("payload", self.payload.value()),
            ("cruise_altitude", self.cruise_altitude.value()),
            ("climb_ground_speed_mps", self.climb_ground_speed_mps),
            ("descent_ground_speed_mps", self.descent_ground_speed_mps),
            ("climb_fuel_flow_kgps", self.climb_fuel_flow_kgps),
            ("cruise_fuel_flow_kgps", self.cruise_fuel_flow_kgps),
            ("descent_fuel_flow_kgps", self.descent_fuel_flow_kgps),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FlightError::InvalidProfile(format!("{field} must be non-negative, got {value}")));
            }
        }
        Ok(())
    }

    /// Fuel-flow multiplier for the current gross mass.
    fn mass_factor(&self, flight: &FlightState) -> f64 {
        let gross = self.empty_mass + self.payload + flight.current_fuel();
        gross.value() / self.reference_mass.value()
    }
}

// ── StandardConsumptionModel ──────────────────────────────────────────────────

/// Reference [`ConsumptionModel`] backed by an [`AircraftProfile`].
#[derive(Clone, Debug, Default)]
pub struct StandardConsumptionModel {
    pub profile: AircraftProfile,
}

impl StandardConsumptionModel {
    pub fn new(profile: AircraftProfile) -> FlightResult<Self> {
        profile.validate()?;
        Ok(Self { profile })
    }

    /// Shared vertical-phase arithmetic for climb and descent.
    fn vertical_phase(
        &self,
        flight:       &FlightState,
        elevation:    Meters,
        rate_mps:     f64,
        ground_speed: f64,
        fuel_flow:    f64,
    ) -> PhaseEstimate {
        let height = (self.profile.cruise_altitude - elevation).max(Meters::ZERO);
        let secs = height.value() / rate_mps;
        PhaseEstimate {
            distance:    Meters::new(secs * ground_speed),
            consumption: Kilograms::new(secs * fuel_flow * self.profile.mass_factor(flight)),
        }
    }
}

impl ConsumptionModel for StandardConsumptionModel {
    fn climb(&self, flight: &FlightState, elevation: Meters) -> PhaseEstimate {
        let p = &self.profile;
        self.vertical_phase(flight, elevation, p.climb_rate_mps, p.climb_ground_speed_mps, p.climb_fuel_flow_kgps)
    }

    fn descent(&self, flight: &FlightState, elevation: Meters) -> PhaseEstimate {
        let p = &self.profile;
        self.vertical_phase(flight, elevation, p.descent_rate_mps, p.descent_ground_speed_mps, p.descent_fuel_flow_kgps)
    }

    fn virtual_distance(
        &self,
        cruise_distance: Meters,
        _flight:         &FlightState,
        segment:         &Segment,
        from:            Coordinate,
        to:              Coordinate,
    ) -> Meters {
        // Legs shorter than climb + descent have no cruise portion.
        if cruise_distance <= Meters::ZERO {
            return Meters::ZERO;
        }
        let tas = self.profile.true_airspeed_mps;
        let headwind = segment.wind.headwind_component(from.bearing_to(to));
        let ground_speed = (tas - headwind).max(MIN_GROUND_SPEED_MPS);
        cruise_distance * (tas / ground_speed)
    }

    fn cruise(&self, flight: &FlightState, virtual_distance: Meters) -> PhaseEstimate {
        let secs = virtual_distance.max(Meters::ZERO).value() / self.profile.true_airspeed_mps;
        PhaseEstimate {
            distance:    virtual_distance,
            consumption: Kilograms::new(
                secs * self.profile.cruise_fuel_flow_kgps * self.profile.mass_factor(flight),
            ),
        }
    }
}
