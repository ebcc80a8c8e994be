//! Iberian air corridor used by the demo.
//!
//! Eight airports joined by great-circle segments.  Westerly winds over the
//! northern legs make the fuel-optimal route differ from the shortest one
//! on eastbound flights.

use anyhow::Result;

use fp_core::{Coordinate, Meters};
use fp_network::{AirNetwork, AirNetworkBuilder, Segment, Wind};

pub const LISBON:    Coordinate = Coordinate::new(38.781, -9.136);
pub const PORTO:     Coordinate = Coordinate::new(41.248, -8.681);
pub const SEVILLE:   Coordinate = Coordinate::new(37.418, -5.893);
pub const MADRID:    Coordinate = Coordinate::new(40.472, -3.561);
pub const BILBAO:    Coordinate = Coordinate::new(43.301, -2.911);
pub const ZARAGOZA:  Coordinate = Coordinate::new(41.666, -1.042);
pub const VALENCIA:  Coordinate = Coordinate::new(39.489, -0.482);
pub const BARCELONA: Coordinate = Coordinate::new(41.297, 2.078);

/// Build the corridor network.
pub fn build_network() -> Result<AirNetwork> {
    let mut b = AirNetworkBuilder::new();

    // Wind blows *from* the given bearing.
    let westerly = Wind::new(270.0, 35.0);
    let cruise   = [Meters::new(10_000.0), Meters::new(11_000.0), Meters::new(12_000.0)];

    let legs: [(&str, Coordinate, Coordinate, Wind); 12] = [
        ("UN725", LISBON,   PORTO,     Wind::CALM),
        ("UN873", LISBON,   MADRID,    Wind::new(250.0, 10.0)),
        ("UM190", LISBON,   SEVILLE,   Wind::CALM),
        ("UN729", PORTO,    MADRID,    Wind::CALM),
        ("UN741", PORTO,    BILBAO,    westerly),
        ("UN857", SEVILLE,  MADRID,    Wind::CALM),
        ("UN864", SEVILLE,  VALENCIA,  Wind::CALM),
        ("UN870", MADRID,   ZARAGOZA,  Wind::CALM),
        ("UN975", MADRID,   VALENCIA,  Wind::CALM),
        ("UN976", BILBAO,   ZARAGOZA,  westerly),
        ("UN851", ZARAGOZA, BARCELONA, westerly),
        ("UN852", VALENCIA, BARCELONA, Wind::new(200.0, 15.0)),
    ];

    for (name, a, z, wind) in legs {
        let segment = Segment::between(name, a, z)
            .with_wind(wind)
            .with_altitudes(cruise);
        b.connect(a, z, segment)?;
    }

    Ok(b.build())
}
