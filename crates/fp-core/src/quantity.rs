//! Physical quantities.
//!
//! Lengths and masses are `f64` newtypes so a fuel figure can never be added
//! to a distance by accident.  [`Amount`] is the aggregate metric returned
//! with a planned route: a length for distance search, a mass for fuel
//! search.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

macro_rules! quantity {
    ($(#[$attr:meta])* $name:ident, $unit:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub f64);

        impl $name {
            pub const ZERO: $name = $name(0.0);

            #[inline]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            #[inline]
            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == std::cmp::Ordering::Equal
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl From<f64> for $name {
            fn from(value: f64) -> Self {
                $name(value)
            }
        }

        impl Add for $name {
            type Output = $name;
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: $name) {
                self.0 += rhs.0;
            }
        }

        impl Sub for $name {
            type Output = $name;
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, rhs: $name) {
                self.0 -= rhs.0;
            }
        }

        impl Mul<f64> for $name {
            type Output = $name;
            fn mul(self, rhs: f64) -> $name {
                $name(self.0 * rhs)
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = $name>>(iter: I) -> $name {
                $name(iter.map(|q| q.0).sum())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:.3} {}", self.0, $unit)
            }
        }
    };
}

quantity! {
    /// A length in metres.
    Meters, "m"
}

quantity! {
    /// A mass in kilograms.
    Kilograms, "kg"
}

impl Meters {
    #[inline]
    pub fn from_km(km: f64) -> Self {
        Meters(km * 1_000.0)
    }

    #[inline]
    pub fn km(self) -> f64 {
        self.0 / 1_000.0
    }
}

/// Aggregate metric of a planned route, tagged with its physical dimension.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Amount {
    /// Total distance (distance-minimizing search).
    Length(Meters),
    /// Total fuel burned (fuel-minimizing search).
    Mass(Kilograms),
}

impl Amount {
    /// Raw magnitude in SI base units (metres or kilograms).
    pub fn value(self) -> f64 {
        match self {
            Amount::Length(m) => m.value(),
            Amount::Mass(kg) => kg.value(),
        }
    }

    pub fn as_length(self) -> Option<Meters> {
        match self {
            Amount::Length(m) => Some(m),
            Amount::Mass(_) => None,
        }
    }

    pub fn as_mass(self) -> Option<Kilograms> {
        match self {
            Amount::Mass(kg) => Some(kg),
            Amount::Length(_) => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Length(m) => m.fmt(f),
            Amount::Mass(kg) => kg.fmt(f),
        }
    }
}
