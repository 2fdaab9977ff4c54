//! Route table and API configuration.
//!
//! The route table is a fixed, hand-edited list: adding a route means adding
//! one entry here and dropping its plan workbook into `flight_plans/`. The
//! API key comes from a `.env` file (or the process environment) and is
//! required at startup.

/// Ingest endpoint for telemetry packets (local development hub).
pub const TELEMETRY_ENDPOINT: &str = "http://127.0.0.1:8000/data";

/// Seconds between sends (both modes pace at this interval).
pub const SEND_INTERVAL_SECS: u64 = 1;

/// One configured flight route: display name, call sign attached to every
/// packet, and the waypoint workbook backing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteSpec {
    pub name: &'static str,
    pub call_sign: &'static str,
    pub plan_file: &'static str,
}

/// The four configured routes, in declaration order. Sequential mode drains
/// them in exactly this order.
pub const ROUTES: [RouteSpec; 4] = [
    RouteSpec {
        name: "Disaster_City_Survey",
        call_sign: "DUSKY27",
        plan_file: "flight_plans/Disaster_City_Survey.xlsx",
    },
    RouteSpec {
        name: "RELLIS_North_to_Hearne",
        call_sign: "DUSKY18",
        plan_file: "flight_plans/RELLIS_North_to_Hearne.xlsx",
    },
    RouteSpec {
        name: "RELLIS_South_to_AggieFarm",
        call_sign: "DUSKY24",
        plan_file: "flight_plans/RELLIS_South_to_AggieFarm.xlsx",
    },
    RouteSpec {
        name: "RELLIS_West_to_Caldwell",
        call_sign: "DUSKY21",
        plan_file: "flight_plans/RELLIS_West_to_Caldwell.xlsx",
    },
];

/// Connection settings for the telemetry ingest endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Full URL of the ingest endpoint.
    pub endpoint: String,
    /// Value for the `X-API-KEY` header.
    pub api_key: String,
}

impl ApiConfig {
    /// Load the API configuration from the environment.
    ///
    /// Reads a `.env` file from the working directory if one exists, then
    /// requires `API_KEY` to be set. A missing key is a startup error in
    /// both operating modes.
    pub fn from_env() -> Result<Self, String> {
        // A missing .env file is fine as long as API_KEY is in the process
        // environment already.
        let _ = dotenvy::dotenv();

        let api_key = std::env::var("API_KEY").map_err(|_| "API_KEY env variable not set".to_string())?;

        Ok(Self {
            endpoint: TELEMETRY_ENDPOINT.to_string(),
            api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_table_has_unique_names_and_call_signs() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in &ROUTES[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.call_sign, b.call_sign);
                assert_ne!(a.plan_file, b.plan_file);
            }
        }
    }

    #[test]
    fn route_plan_files_live_under_flight_plans() {
        for route in &ROUTES {
            assert!(route.plan_file.starts_with("flight_plans/"), "{} has a stray plan path", route.name);
            assert!(route.plan_file.ends_with(".xlsx"));
        }
    }
}
