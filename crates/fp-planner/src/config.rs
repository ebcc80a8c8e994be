//! Planner configuration.

use fp_core::Kilograms;
use fp_flight::DEFAULT_FUEL_FLOOR;

use crate::{PlanError, PlanResult};

/// Tunables shared by every planning call of a [`FlightPlanner`](crate::FlightPlanner).
///
/// | Field                | Default | Meaning                                           |
/// |----------------------|---------|---------------------------------------------------|
/// | `fuel_floor`         | 1 kg    | fuel that must stay on board at all times         |
/// | `validity_threshold` | 1.0     | routes whose aggregate metric is below this fail  |
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub fuel_floor: Kilograms,
    pub validity_threshold: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            fuel_floor:         DEFAULT_FUEL_FLOOR,
            validity_threshold: 1.0,
        }
    }
}

impl PlannerConfig {
    pub fn with_fuel_floor(mut self, floor: Kilograms) -> Self {
        self.fuel_floor = floor;
        self
    }

    pub fn with_validity_threshold(mut self, threshold: f64) -> Self {
        self.validity_threshold = threshold;
        self
    }

    pub fn validate(&self) -> PlanResult<()> {
        let floor = self.fuel_floor.value();
        if !floor.is_finite() || floor < 0.0 {
            return Err(PlanError::Config(format!("fuel_floor must be a non-negative mass, got {floor}")));
        }
        let threshold = self.validity_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(PlanError::Config(format!("validity_threshold must be non-negative, got {threshold}")));
        }
        Ok(())
    }
}
