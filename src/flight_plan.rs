//! Flight plan loading and waypoint extraction.
//!
//! Each route is backed by an xlsx workbook containing a sheet named `in`
//! with `Latitude`, `Longitude`, and `Altitude` columns. Rows missing any of
//! the three values are dropped; the surviving waypoints keep their sheet
//! order and are indexed densely from zero.

use anyhow::Context;
use calamine::{Data, Reader, Xlsx, open_workbook};
use log::warn;
use std::path::Path;

use crate::config::RouteSpec;

/// Name of the worksheet holding the waypoint table.
const WAYPOINT_SHEET: &str = "in";

/// Header names of the three waypoint columns, in output order.
const WAYPOINT_COLUMNS: [&str; 3] = ["Latitude", "Longitude", "Altitude"];

/// A single point along a route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
    /// Meters above ground.
    pub altitude: f64,
}

/// A route with its waypoints loaded. The waypoint sequence is immutable
/// once built and is consumed strictly in order.
#[derive(Debug, Clone)]
pub struct LoadedRoute {
    pub name: String,
    pub call_sign: String,
    pub waypoints: Vec<Waypoint>,
}

/// Error type for flight plan loading failures.
#[derive(Debug)]
pub enum FlightPlanError {
    FileNotFound(String),
    FileOpenError(String),
    MissingSheet(String),
    MissingColumn(String),
}

impl std::fmt::Display for FlightPlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlightPlanError::FileNotFound(path) => write!(f, "Flight plan file not found: {}", path),
            FlightPlanError::FileOpenError(msg) => write!(f, "Failed to open workbook: {}", msg),
            FlightPlanError::MissingSheet(name) => write!(f, "Workbook has no sheet named '{}'", name),
            FlightPlanError::MissingColumn(name) => write!(f, "Waypoint sheet has no '{}' column", name),
        }
    }
}

impl std::error::Error for FlightPlanError {}

/// Controls how a batch load reacts to a route whose workbook is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFilePolicy {
    /// Propagate the error (sequential mode: a missing plan is fatal).
    Fail,
    /// Log a warning naming the route and continue with the rest
    /// (round-robin mode).
    SkipAndWarn,
}

/// Load the waypoint sequence from a flight plan workbook.
///
/// # Parameters
///
/// * `path` - Path to the xlsx plan file
///
/// # Returns
///
/// The ordered waypoint sequence, or an error if the file cannot be opened,
/// the `in` sheet is missing, or a required column header is absent.
pub fn load_flight_plan(path: &Path) -> Result<Vec<Waypoint>, FlightPlanError> {
    if !path.exists() {
        return Err(FlightPlanError::FileNotFound(path.display().to_string()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))
        .map_err(|e| FlightPlanError::FileOpenError(e.to_string()))?;

    let range = workbook
        .worksheet_range(WAYPOINT_SHEET)
        .map_err(|_| FlightPlanError::MissingSheet(WAYPOINT_SHEET.to_string()))?;

    let mut rows = range.rows();
    let header = rows.next().unwrap_or(&[]);
    let columns = locate_columns(header)?;

    Ok(collect_waypoints(rows.map(|row| {
        columns.map(|col| numeric_cell(row.get(col)))
    })))
}

/// Load a batch of routes according to the given missing-file policy.
///
/// Only an absent file is subject to the policy; a file that exists but
/// cannot be read as a workbook, or one with a malformed waypoint sheet,
/// is always an error, in both modes.
pub fn load_routes(specs: &[RouteSpec], policy: MissingFilePolicy) -> Result<Vec<LoadedRoute>, FlightPlanError> {
    let mut routes = Vec::with_capacity(specs.len());

    for spec in specs {
        match load_flight_plan(Path::new(spec.plan_file)) {
            Ok(waypoints) => routes.push(LoadedRoute {
                name: spec.name.to_string(),
                call_sign: spec.call_sign.to_string(),
                waypoints,
            }),
            Err(FlightPlanError::FileNotFound(_)) if policy == MissingFilePolicy::SkipAndWarn => {
                warn!("{} not found, skipping {}", spec.plan_file, spec.name);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(routes)
}

/// Find the column index of each waypoint column in the header row.
fn locate_columns(header: &[Data]) -> Result<[usize; 3], FlightPlanError> {
    WAYPOINT_COLUMNS
        .map(|name| {
            header
                .iter()
                .position(|cell| matches!(cell, Data::String(s) if s.trim() == name))
                .ok_or_else(|| FlightPlanError::MissingColumn(name.to_string()))
        })
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map(|v| [v[0], v[1], v[2]])
}

/// Read a cell as a number. Empty or non-numeric cells count as missing.
fn numeric_cell(cell: Option<&Data>) -> Option<f64> {
    match cell? {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        _ => None,
    }
}

/// Build the waypoint sequence from `[lat, lon, alt]` cell triples, dropping
/// any row with a missing value.
fn collect_waypoints<I>(rows: I) -> Vec<Waypoint>
where
    I: Iterator<Item = [Option<f64>; 3]>,
{
    rows.filter_map(|[lat, lon, alt]| {
        Some(Waypoint {
            latitude: lat?,
            longitude: lon?,
            altitude: alt?,
        })
    })
    .collect()
}
