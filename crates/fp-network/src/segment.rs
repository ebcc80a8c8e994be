//! Route segments.

use fp_core::{Coordinate, Meters};

/// Wind conditions on a segment.
///
/// `direction_deg` is where the wind blows *from*, degrees clockwise from
/// true north, as in a METAR report.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wind {
    pub direction_deg: f64,
    pub intensity_mps: f64,
}

impl Wind {
    pub const CALM: Wind = Wind { direction_deg: 0.0, intensity_mps: 0.0 };

    pub fn new(direction_deg: f64, intensity_mps: f64) -> Self {
        Self { direction_deg, intensity_mps }
    }

    /// Component of the wind opposing travel along `track_deg`.  Positive
    /// for a headwind, negative for a tailwind.
    pub fn headwind_component(self, track_deg: f64) -> f64 {
        let relative = (self.direction_deg - track_deg).to_radians();
        self.intensity_mps * relative.cos()
    }
}

/// A traversable leg of the air-route network.
///
/// The segment itself is undirected; the network stores one directed edge
/// per travel direction, both pointing back at the same segment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Published identifier (e.g. an airway designator).
    pub identification: String,
    /// Physical length.  Used as the edge weight for distance search.
    pub length: Meters,
    /// Cruise altitudes at which the segment may be flown.
    pub allowed_altitudes: Vec<Meters>,
    pub wind: Wind,
}

impl Segment {
    pub fn new(identification: impl Into<String>, length: Meters) -> Self {
        Self {
            identification: identification.into(),
            length,
            allowed_altitudes: Vec::new(),
            wind: Wind::CALM,
        }
    }

    /// Segment whose length is the great-circle distance from `a` to `b`.
    pub fn between(identification: impl Into<String>, a: Coordinate, b: Coordinate) -> Self {
        Self::new(identification, a.distance_to(b))
    }

    pub fn with_wind(mut self, wind: Wind) -> Self {
        self.wind = wind;
        self
    }

    pub fn with_altitudes(mut self, altitudes: impl IntoIterator<Item = Meters>) -> Self {
        self.allowed_altitudes = altitudes.into_iter().collect();
        self
    }
}
