//! HTTP sender for telemetry packets.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::telemetry::TelemetryPacket;

/// Blocking client that POSTs telemetry packets to the ingest endpoint.
pub struct TelemetrySender {
    client: Client,
    config: ApiConfig,
}

impl TelemetrySender {
    /// Create a new TelemetrySender with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client, config })
    }

    /// POST one packet as JSON.
    ///
    /// # Returns
    /// * `Ok(status)` with the response status code; the body is not read
    /// * `Err(String)` on a transport failure
    ///
    /// Callers decide what a failure means: sequential mode propagates it,
    /// round-robin mode logs it and moves on.
    pub fn send(&self, packet: &TelemetryPacket) -> Result<StatusCode, String> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Content-Type", "application/json")
            .header("X-API-KEY", &self.config.api_key)
            .json(packet)
            .send()
            .map_err(|e| format!("Network error: {}", e))?;

        Ok(response.status())
    }
}
