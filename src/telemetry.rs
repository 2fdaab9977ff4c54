//! Telemetry packet synthesis.
//!
//! One packet is generated per waypoint: the position comes straight from
//! the flight plan, everything else is drawn from uniform ranges around
//! fixed baselines so the stream looks like a live aircraft. Packets are
//! transient; nothing is kept after the POST response is logged.

use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde::Serialize;

use crate::flight_plan::Waypoint;

/// Airframe tag attached to every packet.
const AIRFRAME: &str = "Generic";

/// Speed unit tag for the velocity block.
const SPEED_UNITS: &str = "MetersPerSecond";

/// Geographic position, rounded to 6 decimals on emission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Velocity {
    pub airspeed: f64,
    pub ground_speed: f64,
    // The ingest endpoint's schema carries this historical spelling.
    #[serde(rename = "verticle_speed")]
    pub vertical_speed: f64,
    pub units_speed: &'static str,
    /// Track heading in degrees, 0–360.
    pub track: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Battery {
    pub voltage: f64,
    pub current: f64,
    pub percentage: f64,
}

/// Attitude and body rates, degrees and degrees/second.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Orientation {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub pitch_rate: f64,
    pub roll_rate: f64,
    pub yaw_rate: f64,
}

/// One synthetic state snapshot, serialized as the POST body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryPacket {
    pub call_sign: String,
    pub position: Position,
    pub velocity: Velocity,
    /// UTC timestamp, ISO-8601 with a `Z` suffix.
    pub time_measured: String,
    pub battery: Battery,
    pub orientation: Orientation,
    pub airframe: &'static str,
}

/// Generate a telemetry packet for one waypoint.
///
/// Every randomized field is drawn independently per call. The randomness
/// source is a parameter so tests can pass a seeded generator; production
/// callers hand in `rand::thread_rng()`.
pub fn generate_packet<R: Rng>(rng: &mut R, waypoint: &Waypoint, call_sign: &str) -> TelemetryPacket {
    TelemetryPacket {
        call_sign: call_sign.to_string(),
        position: Position {
            latitude: round6(waypoint.latitude),
            longitude: round6(waypoint.longitude),
            altitude: round6(waypoint.altitude),
        },
        velocity: Velocity {
            airspeed: round2(50.0 + rng.gen_range(-5.0..=5.0)),
            ground_speed: round2(50.0 + rng.gen_range(-5.0..=5.0)),
            vertical_speed: round2(rng.gen_range(-0.5..=0.5)),
            units_speed: SPEED_UNITS,
            track: round2(rng.gen_range(0.0..360.0)),
        },
        time_measured: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        battery: Battery {
            voltage: round2(12.0 + rng.gen_range(0.0..=0.6)),
            current: round2(1.0 + rng.gen_range(-0.2..=0.2)),
            percentage: round2(rng.gen_range(80.0..=100.0)),
        },
        orientation: Orientation {
            pitch: round2(rng.gen_range(-5.0..=5.0)),
            roll: round2(rng.gen_range(-5.0..=5.0)),
            yaw: round2(rng.gen_range(0.0..360.0)),
            pitch_rate: round2(rng.gen_range(-1.0..=1.0)),
            roll_rate: round2(rng.gen_range(-1.0..=1.0)),
            yaw_rate: round2(rng.gen_range(-1.0..=1.0)),
        },
        airframe: AIRFRAME,
    }
}

/// Map a track heading in degrees to one of 8 compass labels.
///
/// Each sector is 45° wide, offset by 22.5° so 0° sits in the middle of the
/// `N` sector. Inputs outside 0–360 (including exactly 360) wrap via the
/// Euclidean remainder. Cosmetic only; never sent on the wire.
pub fn cardinal_direction(heading: f64) -> &'static str {
    const DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let sector = (((heading + 22.5) / 45.0).floor() as i64).rem_euclid(8) as usize;
    DIRECTIONS[sector]
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn waypoint() -> Waypoint {
        Waypoint {
            latitude: 30.1,
            longitude: -96.3,
            altitude: 50.0,
        }
    }

    #[test]
    fn generated_fields_stay_within_declared_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let wp = waypoint();

        for _ in 0..1000 {
            let p = generate_packet(&mut rng, &wp, "DUSKY27");

            assert!((45.0..=55.0).contains(&p.velocity.airspeed));
            assert!((45.0..=55.0).contains(&p.velocity.ground_speed));
            assert!((-0.5..=0.5).contains(&p.velocity.vertical_speed));
            assert!((0.0..=360.0).contains(&p.velocity.track));
            assert!((12.0..=12.6).contains(&p.battery.voltage));
            assert!((0.8..=1.2).contains(&p.battery.current));
            assert!((80.0..=100.0).contains(&p.battery.percentage));
            assert!((-5.0..=5.0).contains(&p.orientation.pitch));
            assert!((-5.0..=5.0).contains(&p.orientation.roll));
            assert!((0.0..=360.0).contains(&p.orientation.yaw));
            assert!((-1.0..=1.0).contains(&p.orientation.pitch_rate));
            assert!((-1.0..=1.0).contains(&p.orientation.roll_rate));
            assert!((-1.0..=1.0).contains(&p.orientation.yaw_rate));
        }
    }

    #[test]
    fn position_equals_waypoint_rounded_to_six_decimals() {
        let mut rng = StdRng::seed_from_u64(1);
        let wp = Waypoint {
            latitude: 30.123456789,
            longitude: -96.987654321,
            altitude: 50.000000499,
        };

        let p = generate_packet(&mut rng, &wp, "DUSKY18");
        assert_eq!(p.position.latitude, 30.123457);
        assert_eq!(p.position.longitude, -96.987654);
        assert_eq!(p.position.altitude, 50.0);
    }

    #[test]
    fn same_seed_yields_same_random_fields() {
        let wp = waypoint();
        let a = generate_packet(&mut StdRng::seed_from_u64(7), &wp, "DUSKY21");
        let b = generate_packet(&mut StdRng::seed_from_u64(7), &wp, "DUSKY21");

        assert_eq!(a.velocity, b.velocity);
        assert_eq!(a.battery, b.battery);
        assert_eq!(a.orientation, b.orientation);
    }

    #[test]
    fn serialized_packet_has_expected_shape() {
        let mut rng = StdRng::seed_from_u64(9);
        let p = generate_packet(&mut rng, &waypoint(), "DUSKY27");
        let value = serde_json::to_value(&p).unwrap();

        assert_eq!(
            value["position"],
            serde_json::json!({"latitude": 30.1, "longitude": -96.3, "altitude": 50.0})
        );
        assert_eq!(value["call_sign"], "DUSKY27");
        assert_eq!(value["airframe"], "Generic");
        assert_eq!(value["velocity"]["units_speed"], "MetersPerSecond");
        // The wire key keeps the ingest endpoint's spelling.
        assert!(value["velocity"]["verticle_speed"].is_number());
        assert!(value["velocity"].get("vertical_speed").is_none());
        assert!(value["battery"]["voltage"].is_number());
        assert!(value["orientation"]["yaw_rate"].is_number());

        let ts = value["time_measured"].as_str().unwrap();
        assert!(ts.ends_with('Z'), "timestamp not Z-suffixed: {ts}");
        assert!(ts.contains('T'));
    }

    #[test]
    fn cardinal_sectors_and_wrapping() {
        assert_eq!(cardinal_direction(0.0), "N");
        assert_eq!(cardinal_direction(22.4), "N");
        assert_eq!(cardinal_direction(22.5), "NE");
        assert_eq!(cardinal_direction(45.1), "NE");
        assert_eq!(cardinal_direction(90.0), "E");
        assert_eq!(cardinal_direction(135.0), "SE");
        assert_eq!(cardinal_direction(180.0), "S");
        assert_eq!(cardinal_direction(225.0), "SW");
        assert_eq!(cardinal_direction(270.0), "W");
        assert_eq!(cardinal_direction(315.0), "NW");
        // Unwrapped and negative inputs land via the Euclidean remainder.
        assert_eq!(cardinal_direction(360.0), "N");
        assert_eq!(cardinal_direction(-45.0), "NW");
    }
}
