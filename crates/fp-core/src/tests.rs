//! Unit tests for fp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId, SegmentId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
        assert_eq!(SegmentId::INVALID.0, u32::MAX);
        assert!(!NodeId::default().is_valid());
        assert!(NodeId(0).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(SegmentId(7).to_string(), "SegmentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use std::collections::HashSet;

    use crate::{CoreError, Coordinate};

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(38.7742, -9.1342);
        assert!(p.distance_to(p).value() < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = Coordinate::new(40.0, -8.0);
        let b = Coordinate::new(41.0, -8.0);
        let d = a.distance_to(b).value();
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = Coordinate::new(0.0, 0.0);
        let north = origin.bearing_to(Coordinate::new(1.0, 0.0));
        let east = origin.bearing_to(Coordinate::new(0.0, 1.0));
        let west = origin.bearing_to(Coordinate::new(0.0, -1.0));
        assert!(north.abs() < 1e-9, "got {north}");
        assert!((east - 90.0).abs() < 1e-9, "got {east}");
        assert!((west - 270.0).abs() < 1e-9, "got {west}");
    }

    #[test]
    fn equality_and_hash_by_value() {
        let a = Coordinate::new(41.2481, -8.6814);
        let b = Coordinate::new(41.2481, -8.6814);
        assert_eq!(a, b);

        let set: HashSet<Coordinate> = [a, b, Coordinate::new(0.0, 0.0)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ordering_latitude_first() {
        assert!(Coordinate::new(1.0, 50.0) < Coordinate::new(2.0, -50.0));
        assert!(Coordinate::new(1.0, 1.0) < Coordinate::new(1.0, 2.0));
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Coordinate::try_new(45.0, 90.0).is_ok());
        assert_eq!(
            Coordinate::try_new(91.0, 0.0),
            Err(CoreError::InvalidCoordinate { lat: 91.0, lon: 0.0 })
        );
        assert!(Coordinate::try_new(0.0, 180.5).is_err());
        assert!(Coordinate::try_new(f64::NAN, 0.0).is_err());
    }
}

#[cfg(test)]
mod quantity {
    use crate::{Amount, Kilograms, Meters};

    #[test]
    fn arithmetic() {
        let mut fuel = Kilograms::new(100.0);
        fuel -= Kilograms::new(30.0);
        assert_eq!(fuel, Kilograms::new(70.0));
        assert_eq!(fuel + Kilograms::new(5.0), Kilograms::new(75.0));
        assert_eq!(Meters::new(2.0) * 3.0, Meters::new(6.0));

        let total: Meters = [1.0, 2.0, 3.5].into_iter().map(Meters::new).sum();
        assert_eq!(total, Meters::new(6.5));
    }

    #[test]
    fn km_conversion() {
        assert_eq!(Meters::from_km(1.5), Meters::new(1_500.0));
        assert_eq!(Meters::new(2_500.0).km(), 2.5);
    }

    #[test]
    fn ordering() {
        assert!(Kilograms::new(0.5) < Kilograms::new(1.0));
        assert_eq!(Meters::new(3.0).max(Meters::new(-1.0)), Meters::new(3.0));
    }

    #[test]
    fn amount_accessors_and_display() {
        let len = Amount::Length(Meters::new(12.0));
        let mass = Amount::Mass(Kilograms::new(3.25));
        assert_eq!(len.value(), 12.0);
        assert_eq!(len.as_length(), Some(Meters::new(12.0)));
        assert_eq!(len.as_mass(), None);
        assert_eq!(mass.as_mass(), Some(Kilograms::new(3.25)));
        assert_eq!(len.to_string(), "12.000 m");
        assert_eq!(mass.to_string(), "3.250 kg");
    }
}
