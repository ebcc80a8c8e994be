//! corridor: plans flights across a small Iberian air network.
//!
//! Compares the shortest-distance and fuel-efficient routes for a direct
//! request and for one with a technical stop.  Set `RUST_LOG=debug` to see
//! per-leg search details.

mod network;

use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fp_core::{Coordinate, Kilograms, Meters};
use fp_flight::{FlightState, StandardConsumptionModel};
use fp_network::Junction;
use fp_planner::{Algorithm, FlightPlanner, FlightRequest, PlannerConfig};

use network::{build_network, BARCELONA, LISBON, MADRID, SEVILLE};

// ── Constants ─────────────────────────────────────────────────────────────────

const FUEL_ON_BOARD:       f64 = 25_000.0; // kg
const LISBON_ELEVATION:    f64 = 114.0;    // m
const BARCELONA_ELEVATION: f64 = 4.0;      // m

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let network = build_network()?;
    info!(
        vertices = network.vertex_count(),
        edges = network.edge_count(),
        segments = network.segment_count(),
        "network built"
    );

    let planner = FlightPlanner::new(StandardConsumptionModel::default(), PlannerConfig::default())?;
    let flight = FlightState::new(
        Kilograms::new(FUEL_ON_BOARD),
        Meters::new(LISBON_ELEVATION),
        Meters::new(BARCELONA_ELEVATION),
    );

    let requests = [
        ("direct", FlightRequest::new(LISBON, BARCELONA)),
        (
            "via Madrid (technical stop)",
            FlightRequest::new(LISBON, BARCELONA).with_junction(Junction::TechnicalStop(MADRID)),
        ),
        (
            "via Seville (waypoint)",
            FlightRequest::new(LISBON, BARCELONA).with_junction(Junction::Waypoint(SEVILLE)),
        ),
    ];

    for (label, request) in &requests {
        println!("\n── Lisbon → Barcelona, {label} ──");
        let start = Instant::now();
        for (algorithm, result) in planner.compare(&network, request, &flight, &Algorithm::ALL) {
            match result {
                Ok(route) => {
                    let names: Vec<&str> = route
                        .resolve_segments(&network)
                        .map(|s| s.identification.as_str())
                        .collect();
                    println!(
                        "  {:<20} {:>14}  fuel left {:>12}  {}",
                        algorithm.description(),
                        route.total.to_string(),
                        route.remaining_fuel.to_string(),
                        names.join(" → "),
                    );
                }
                Err(err) => println!("  {:<20} failed: {err}", algorithm.description()),
            }
        }
        info!(request = *label, elapsed_us = start.elapsed().as_micros() as u64, "compared");
    }

    // An airport that is not a network vertex snaps to the nearest one.
    let toledo = Coordinate::new(39.86, -4.02);
    if let Some(snapped) = network.nearest_point(toledo) {
        println!("\nToledo snaps to {snapped}");
    }

    Ok(())
}
