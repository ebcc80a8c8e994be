//! Per-run flight state.

use fp_core::{Kilograms, Meters};

use crate::{FlightError, FlightResult};

/// Fuel that must always remain on board.
pub const DEFAULT_FUEL_FLOOR: Kilograms = Kilograms(1.0);

/// Flight phase, each with its own consumption formula.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlightPhase {
    #[default]
    Climb,
    Cruise,
    Descent,
}

impl FlightPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            FlightPhase::Climb   => "climb",
            FlightPhase::Cruise  => "cruise",
            FlightPhase::Descent => "descent",
        }
    }
}

impl std::fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mutable fuel and phase record of one planning run.
///
/// Fuel never drops below `fuel_floor`: every operation that would cross it
/// fails with [`FlightError::InsufficientFuel`] and leaves the state as it
/// was.
#[derive(Clone, Debug, PartialEq)]
pub struct FlightState {
    initial_fuel:          Kilograms,
    fuel:                  Kilograms,
    fuel_floor:            Kilograms,
    phase:                 FlightPhase,
    origin_elevation:      Meters,
    destination_elevation: Meters,
}

impl FlightState {
    /// A flight about to depart with `fuel` on board, in the climb phase.
    pub fn new(fuel: Kilograms, origin_elevation: Meters, destination_elevation: Meters) -> Self {
        Self {
            initial_fuel: fuel,
            fuel,
            fuel_floor: DEFAULT_FUEL_FLOOR,
            phase: FlightPhase::Climb,
            origin_elevation,
            destination_elevation,
        }
    }

    pub fn with_fuel_floor(mut self, floor: Kilograms) -> Self {
        self.fuel_floor = floor;
        self
    }

    // ── Fuel ──────────────────────────────────────────────────────────────

    /// Burn `amount`, returning the fuel left.
    pub fn consume(&mut self, amount: Kilograms) -> FlightResult<Kilograms> {
        let left = self.fuel - amount;
        if left < self.fuel_floor {
            return Err(FlightError::InsufficientFuel {
                required:  amount,
                available: self.fuel,
            });
        }
        self.fuel = left;
        Ok(left)
    }

    /// Reset the fuel on board to `leg_start - spent`, i.e. to what is left
    /// after burning `spent` since the leg began with `leg_start`.
    pub fn settle(&mut self, leg_start: Kilograms, spent: Kilograms) -> FlightResult<Kilograms> {
        let left = leg_start - spent;
        if left < self.fuel_floor {
            return Err(FlightError::InsufficientFuel {
                required:  spent,
                available: leg_start,
            });
        }
        self.fuel = left;
        Ok(left)
    }

    #[inline]
    pub fn current_fuel(&self) -> Kilograms {
        self.fuel
    }

    #[inline]
    pub fn initial_fuel(&self) -> Kilograms {
        self.initial_fuel
    }

    /// Fuel burned since the state was created.
    #[inline]
    pub fn consumed(&self) -> Kilograms {
        self.initial_fuel - self.fuel
    }

    #[inline]
    pub fn fuel_floor(&self) -> Kilograms {
        self.fuel_floor
    }

    // ── Phase & elevation context ─────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    #[inline]
    pub fn set_phase(&mut self, phase: FlightPhase) {
        self.phase = phase;
    }

    #[inline]
    pub fn origin_elevation(&self) -> Meters {
        self.origin_elevation
    }

    #[inline]
    pub fn destination_elevation(&self) -> Meters {
        self.destination_elevation
    }
}
