//! Round-robin sender: advances every active route by one waypoint per
//! one-second tick until all routes are exhausted.
//!
//! Routes whose plan file is missing are skipped with a warning; transport
//! failures are logged and the route keeps going (the cursor has already
//! advanced, so a failed send counts as processed).

use anyhow::anyhow;
use env_logger::Builder;
use log::{LevelFilter, error, info};
use std::thread;
use std::time::Duration;

use flight_telemetry_simulator::config::{ApiConfig, ROUTES, SEND_INTERVAL_SECS};
use flight_telemetry_simulator::flight_plan::{MissingFilePolicy, load_routes};
use flight_telemetry_simulator::scheduler::RoundRobin;
use flight_telemetry_simulator::sender::TelemetrySender;
use flight_telemetry_simulator::telemetry::{cardinal_direction, generate_packet};

fn main() -> anyhow::Result<()> {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("flight_telemetry_simulator"), LevelFilter::Debug)
        .init();

    info!("Starting up (round-robin mode)");

    let config = ApiConfig::from_env().map_err(|e| anyhow!(e))?;
    let sender = TelemetrySender::new(config).map_err(|e| anyhow!(e))?;

    let routes = load_routes(&ROUTES, MissingFilePolicy::SkipAndWarn)?;
    info!("Loaded {} flights", routes.len());
    for route in &routes {
        info!("  {}: {} waypoints -> {}", route.name, route.waypoints.len(), route.call_sign);
    }

    let mut rng = rand::thread_rng();
    let mut round_robin = RoundRobin::new(routes);

    while !round_robin.all_complete() {
        for item in round_robin.tick() {
            let route = round_robin.route(item.route_index);
            let waypoint = &route.waypoints[item.waypoint_index];

            let packet = generate_packet(&mut rng, waypoint, &route.call_sign);
            let heading = packet.velocity.track;
            info!(
                "{} [{}/{}] | callsign: {} | heading: {:.2}° ({})",
                route.name,
                item.waypoint_index + 1,
                route.waypoints.len(),
                route.call_sign,
                heading,
                cardinal_direction(heading)
            );

            match sender.send(&packet) {
                Ok(status) => info!("-> HTTP {}", status.as_u16()),
                Err(e) => error!("-> {}", e),
            }

            if item.route_completed {
                info!("{} complete ({} waypoints sent)", route.name, route.waypoints.len());
            }
        }

        thread::sleep(Duration::from_secs(SEND_INTERVAL_SECS));
    }

    info!("=== All flights complete ===");
    Ok(())
}
