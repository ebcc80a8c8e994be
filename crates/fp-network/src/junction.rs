//! Junction classification: pass-through waypoints vs. technical stops.

use fp_core::Coordinate;

/// A network point annotated with its role in a flight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Junction {
    /// Overflown without a phase change.
    Waypoint(Coordinate),
    /// Mandatory landing and take-off: forces descent, then climb.
    TechnicalStop(Coordinate),
}

impl Junction {
    #[inline]
    pub fn point(self) -> Coordinate {
        match self {
            Junction::Waypoint(p) | Junction::TechnicalStop(p) => p,
        }
    }

    #[inline]
    pub fn is_technical_stop(self) -> bool {
        matches!(self, Junction::TechnicalStop(_))
    }
}

/// `true` when `point` is listed in `junctions` as a technical stop.
///
/// Linear scan; flights carry a handful of junctions at most.
pub fn is_technical_stop(point: Coordinate, junctions: &[Junction]) -> bool {
    junctions
        .iter()
        .any(|j| matches!(j, Junction::TechnicalStop(p) if *p == point))
}
