//! # Calo Telemetry
//!
//! Tracing initialization for the trigger suite.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use calo_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(config).expect("telemetry init");
//!     // tracing events from the suite are now formatted to stderr
//! }
//! ```

mod config;

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

pub use config::TelemetryConfig;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Telemetry already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Guard keeping the installed subscriber's identity; hold it for the
/// lifetime of the process.
#[derive(Debug)]
pub struct TelemetryGuard {
    /// Service name the subscriber was installed for.
    pub service_name: String,
}

/// Install the global tracing subscriber per the supplied configuration.
/// A second call errs rather than silently replacing the first.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(config.with_targets)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}
