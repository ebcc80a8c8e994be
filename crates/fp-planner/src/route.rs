//! Planning results.

use fp_core::{Amount, Coordinate, Kilograms, SegmentId};
use fp_network::{AirNetwork, Segment};

/// One origin → destination search, before legs are joined into a [`Route`].
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// Visited points, both endpoints included.
    pub points:   Vec<Coordinate>,
    /// Segments flown in order; `points.len() - 1` entries.
    pub segments: Vec<SegmentId>,
    /// Raw metric total in the metric's unit.
    pub total:    f64,
}

/// A complete flight plan from origin to destination through every
/// mandatory junction.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Description of the metric that produced the route.
    pub algorithm:      &'static str,
    pub segments:       Vec<SegmentId>,
    /// Points flown over; consecutive entries are never equal.
    pub points:         Vec<Coordinate>,
    /// Aggregate metric, summed over all legs.
    pub total:          Amount,
    /// Fuel on board once planning finished.
    pub remaining_fuel: Kilograms,
}

impl Route {
    pub fn origin(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Resolve the segment ids against the network they were planned on.
    pub fn resolve_segments<'n>(&'n self, network: &'n AirNetwork) -> impl Iterator<Item = &'n Segment> + 'n {
        self.segments.iter().filter_map(move |&id| network.segment(id))
    }
}
