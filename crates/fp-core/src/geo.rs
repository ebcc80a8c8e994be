//! Geographic coordinate type and spatial utilities.
//!
//! `Coordinate` is the vertex key of the air network, so unlike a plain
//! float pair it is `Eq + Ord + Hash`.  All three are defined over the IEEE
//! total order (`f64::total_cmp`), latitude first, which keeps them mutually
//! consistent and lets coordinates live in hash maps and sorted collections.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::{CoreError, CoreResult, Meters};

/// Mean Earth radius, metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Unchecked constructor.  Use [`try_new`](Self::try_new) for values
    /// coming from outside the process.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Construct a coordinate, rejecting non-finite or out-of-range values.
    pub fn try_new(lat: f64, lon: f64) -> CoreResult<Self> {
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        if valid {
            Ok(Self { lat, lon })
        } else {
            Err(CoreError::InvalidCoordinate { lat, lon })
        }
    }

    /// Haversine great-circle distance.
    pub fn distance_to(self, other: Coordinate) -> Meters {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Meters::new(EARTH_RADIUS_M * c)
    }

    /// Initial great-circle bearing towards `other`, degrees clockwise from
    /// true north in `[0, 360)`.
    pub fn bearing_to(self, other: Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        y.atan2(x).to_degrees().rem_euclid(360.0)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Coordinate {}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lat
            .total_cmp(&other.lat)
            .then_with(|| self.lon.total_cmp(&other.lon))
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lon.to_bits().hash(state);
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
