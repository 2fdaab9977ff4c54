//! Sequential sender: drains each route to completion before starting the
//! next, one waypoint per second.
//!
//! Error handling is deliberately strict in this mode: a missing plan file
//! or a transport failure on any send terminates the process.

use anyhow::{Context, anyhow};
use env_logger::Builder;
use log::{LevelFilter, info};
use std::path::Path;
use std::thread;
use std::time::Duration;

use flight_telemetry_simulator::config::{ApiConfig, ROUTES, SEND_INTERVAL_SECS};
use flight_telemetry_simulator::flight_plan::load_flight_plan;
use flight_telemetry_simulator::sender::TelemetrySender;
use flight_telemetry_simulator::telemetry::generate_packet;

fn main() -> anyhow::Result<()> {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("flight_telemetry_simulator"), LevelFilter::Debug)
        .init();

    info!("Starting up (sequential mode)");

    let config = ApiConfig::from_env().map_err(|e| anyhow!(e))?;
    let sender = TelemetrySender::new(config).map_err(|e| anyhow!(e))?;
    let mut rng = rand::thread_rng();

    for route in &ROUTES {
        info!("=== Processing {} ===", route.name);

        let waypoints = load_flight_plan(Path::new(route.plan_file)).with_context(|| format!("loading flight plan for {}", route.name))?;
        let total = waypoints.len();

        for (index, waypoint) in waypoints.iter().enumerate() {
            let packet = generate_packet(&mut rng, waypoint, route.call_sign);

            // A transport error is fatal here, unlike in round-robin mode.
            let status = sender.send(&packet).map_err(|e| anyhow!(e))?;
            info!("Waypoint {}/{}: {} | HTTP {}", index + 1, total, route.call_sign, status.as_u16());

            thread::sleep(Duration::from_secs(SEND_INTERVAL_SECS));
        }
    }

    Ok(())
}
