//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for tracing output.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name prefixed to log lines.
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,

    /// Whether to include span targets in output.
    pub with_targets: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "calo-trigger".to_string(),
            log_level: "info".to_string(),
            with_targets: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CALO_SERVICE_NAME`: Service name (default: calo-trigger)
    /// - `CALO_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `CALO_LOG_TARGETS`: Include event targets (default: false)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("CALO_SERVICE_NAME")
                .unwrap_or_else(|_| "calo-trigger".to_string()),

            log_level: env::var("CALO_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            with_targets: env::var("CALO_LOG_TARGETS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
