//! Flight telemetry simulator: reads waypoint spreadsheets for a fixed set of
//! flight routes, synthesizes plausible telemetry packets at each waypoint,
//! and POSTs them as JSON to a local ingest endpoint once per second.
//!
//! Two binaries drive the library: `send-sequential` drains one route at a
//! time in declaration order, `send-round-robin` interleaves all routes one
//! waypoint per tick.

pub mod config;
pub mod flight_plan;
pub mod scheduler;
pub mod sender;
pub mod telemetry;
