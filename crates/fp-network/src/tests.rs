//! Unit tests for fp-network.
//!
//! All tests use hand-crafted networks.

#[cfg(test)]
mod helpers {
    use fp_core::{Coordinate, Meters};
    use crate::{AirNetwork, AirNetworkBuilder, Segment};

    pub const A: Coordinate = Coordinate::new(0.0, 0.0);
    pub const B: Coordinate = Coordinate::new(0.0, 1.0);
    pub const C: Coordinate = Coordinate::new(1.0, 1.0);
    pub const D: Coordinate = Coordinate::new(1.0, 0.0);

    /// Square A-B-C-D with undirected legs A-B, B-C, C-D, D-A.
    pub fn square() -> AirNetwork {
        let mut b = AirNetworkBuilder::new();
        b.connect(A, B, Segment::new("AB", Meters::new(100.0))).unwrap();
        b.connect(B, C, Segment::new("BC", Meters::new(100.0))).unwrap();
        b.connect(C, D, Segment::new("CD", Meters::new(100.0))).unwrap();
        b.connect(D, A, Segment::new("DA", Meters::new(500.0))).unwrap();
        b.build()
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use fp_core::{Coordinate, Meters, NodeId, SegmentId};
    use crate::{AirNetworkBuilder, NetworkError, Segment};

    use super::helpers::{A, B, C};

    #[test]
    fn empty_build() {
        let net = AirNetworkBuilder::new().build();
        assert_eq!(net.vertex_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn vertex_keys_are_dense_and_idempotent() {
        let mut b = AirNetworkBuilder::new();
        assert_eq!(b.add_vertex(A), NodeId(0));
        assert_eq!(b.add_vertex(B), NodeId(1));
        assert_eq!(b.add_vertex(A), NodeId(0));
        let net = b.build();
        assert_eq!(net.vertex_count(), 2);
        assert_eq!(net.key(A), Some(NodeId(0)));
        assert_eq!(net.key(B), Some(NodeId(1)));
        assert_eq!(net.point(NodeId(1)), B);
    }

    #[test]
    fn add_edge_rejects_unknown_vertex() {
        let mut b = AirNetworkBuilder::new();
        b.add_vertex(A);
        let seg = b.add_segment(Segment::new("AB", Meters::new(10.0)));
        assert!(!b.add_edge(A, B, seg, 10.0));
        assert_eq!(
            b.try_add_edge(A, B, seg, 10.0),
            Err(NetworkError::UnknownVertex(B))
        );
        assert_eq!(b.edge_count(), 0);
    }

    #[test]
    fn add_edge_rejects_bad_weight_and_segment() {
        let mut b = AirNetworkBuilder::new();
        b.add_vertex(A);
        b.add_vertex(B);
        let seg = b.add_segment(Segment::new("AB", Meters::new(10.0)));
        assert_eq!(b.try_add_edge(A, B, seg, -1.0), Err(NetworkError::InvalidWeight(-1.0)));
        assert!(!b.add_edge(A, B, seg, f64::INFINITY));
        assert_eq!(
            b.try_add_edge(A, B, SegmentId(9), 1.0),
            Err(NetworkError::UnknownSegment(SegmentId(9)))
        );
        assert!(b.add_edge(A, B, seg, 0.0));
    }

    #[test]
    fn add_edge_rejects_duplicate_pair() {
        let mut b = AirNetworkBuilder::new();
        b.add_vertex(A);
        b.add_vertex(B);
        let seg = b.add_segment(Segment::new("AB", Meters::new(10.0)));
        assert!(b.add_edge(A, B, seg, 10.0));
        assert!(!b.add_edge(A, B, seg, 5.0));
        // The reverse direction is a different edge.
        assert!(b.add_edge(B, A, seg, 10.0));
        assert_eq!(b.edge_count(), 2);
    }

    #[test]
    fn connect_is_bidirectional() {
        let mut b = AirNetworkBuilder::new();
        let seg = b.connect(A, C, Segment::between("AC", A, C)).unwrap();
        let net = b.build();
        assert_eq!(net.edge_count(), 2);
        let (a, c) = (net.key(A).unwrap(), net.key(C).unwrap());
        let ac = net.edge(a, c).unwrap();
        let ca = net.edge(c, a).unwrap();
        assert_eq!(net.edge_segment_id(ac), seg);
        assert_eq!(net.edge_segment_id(ca), seg);
        assert!((net.edge_weight(ac) - A.distance_to(C).value()).abs() < 1e-9);
    }

    #[test]
    fn connect_duplicate_adds_nothing() {
        let mut b = AirNetworkBuilder::new();
        b.connect(A, B, Segment::new("AB", Meters::new(10.0))).unwrap();
        let err = b.connect(B, A, Segment::new("BA", Meters::new(10.0))).unwrap_err();
        assert_eq!(err, NetworkError::DuplicateEdge { from: B, to: A });
        let net = b.build();
        assert_eq!(net.edge_count(), 2);
        assert_eq!(net.segment_count(), 1);
    }

    #[test]
    fn connect_rejects_negative_length() {
        let mut b = AirNetworkBuilder::new();
        let far = Coordinate::new(5.0, 5.0);
        let err = b.connect(A, far, Segment::new("X", Meters::new(-3.0))).unwrap_err();
        assert_eq!(err, NetworkError::InvalidWeight(-3.0));
        assert_eq!(b.edge_count(), 0);
    }
}

// ── Graph traversal ───────────────────────────────────────────────────────────

#[cfg(test)]
mod traversal {
    use fp_core::{EdgeId, NodeId};

    use super::helpers::{square, A, B, C, D};

    #[test]
    fn csr_out_edges() {
        let net = square();
        for p in [A, B, C, D] {
            let n = net.key(p).unwrap();
            assert_eq!(net.out_degree(n), 2, "{p} should have 2 outgoing edges");
            for e in net.outgoing_edges(n) {
                assert_eq!(net.edge_origin(e), n);
            }
        }
    }

    #[test]
    fn unknown_node_has_no_edges() {
        let net = square();
        assert_eq!(net.outgoing_edges(NodeId(99)).count(), 0);
        assert_eq!(net.out_degree(NodeId::INVALID), 0);
    }

    #[test]
    fn opposite_endpoint() {
        let net = square();
        let (a, b, c) = (net.key(A).unwrap(), net.key(B).unwrap(), net.key(C).unwrap());
        let ab = net.edge(a, b).unwrap();
        assert_eq!(net.opposite(a, ab), Some(b));
        assert_eq!(net.opposite(b, ab), Some(a));
        assert_eq!(net.opposite(c, ab), None);
        assert_eq!(net.opposite(a, EdgeId(1_000)), None);
    }

    #[test]
    fn edge_lookup_by_pair() {
        let net = square();
        let (a, b, c) = (net.key(A).unwrap(), net.key(B).unwrap(), net.key(C).unwrap());
        assert!(net.edge(a, b).is_some());
        assert!(net.edge(a, c).is_none(), "A and C are not adjacent");
        assert_eq!(net.segment_between(b, c).unwrap().identification, "BC");
        assert_eq!(net.segment_between(c, b).unwrap().identification, "BC");
    }

    #[test]
    fn weights_are_non_negative() {
        let net = square();
        assert!(net.edge_weight.iter().all(|w| *w >= 0.0 && w.is_finite()));
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use fp_core::Coordinate;
    use crate::AirNetwork;

    use super::helpers::{square, A, B};

    #[test]
    fn snap_exact_position() {
        let net = square();
        assert_eq!(net.nearest_point(A), Some(A));
    }

    #[test]
    fn snap_nearest() {
        let net = square();
        assert_eq!(net.nearest_point(Coordinate::new(0.0, 0.4)), Some(A));
        assert_eq!(net.nearest_point(Coordinate::new(0.1, 0.6)), Some(B));
    }

    #[test]
    fn empty_network_returns_none() {
        assert!(AirNetwork::empty().nearest_point(A).is_none());
    }
}

// ── Junctions & segments ──────────────────────────────────────────────────────

#[cfg(test)]
mod junctions {
    use fp_core::{Coordinate, Meters};
    use crate::{is_technical_stop, Junction, Segment, Wind};

    #[test]
    fn only_technical_stops_match() {
        let stop = Coordinate::new(40.0, -8.0);
        let wp = Coordinate::new(41.0, -8.0);
        let junctions = [Junction::Waypoint(wp), Junction::TechnicalStop(stop)];
        assert!(is_technical_stop(stop, &junctions));
        assert!(!is_technical_stop(wp, &junctions));
        assert!(!is_technical_stop(Coordinate::new(0.0, 0.0), &junctions));
        assert!(!is_technical_stop(stop, &[]));
    }

    #[test]
    fn junction_point() {
        let p = Coordinate::new(1.0, 2.0);
        assert_eq!(Junction::Waypoint(p).point(), p);
        assert!(Junction::TechnicalStop(p).is_technical_stop());
        assert!(!Junction::Waypoint(p).is_technical_stop());
    }

    #[test]
    fn headwind_component() {
        // Flying north (000) into a wind from the north: full headwind.
        let w = Wind::new(0.0, 20.0);
        assert!((w.headwind_component(0.0) - 20.0).abs() < 1e-9);
        // Flying south with the same wind: full tailwind.
        assert!((w.headwind_component(180.0) + 20.0).abs() < 1e-9);
        // Crosswind contributes nothing.
        assert!(w.headwind_component(90.0).abs() < 1e-9);
    }

    #[test]
    fn segment_between_uses_great_circle_length() {
        let a = Coordinate::new(38.781, -9.136);
        let b = Coordinate::new(41.248, -8.681);
        let s = Segment::between("UN725", a, b)
            .with_altitudes([Meters::new(10_000.0), Meters::new(11_000.0)]);
        assert_eq!(s.length, a.distance_to(b));
        assert_eq!(s.allowed_altitudes.len(), 2);
        assert_eq!(s.wind, Wind::CALM);
    }
}
