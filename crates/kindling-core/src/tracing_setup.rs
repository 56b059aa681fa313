//! Tracing setup: structured logging for simulation runs.

use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;
use crate::constants::LOG_ENV_VAR;

/// Initialize the global tracing subscriber.
///
/// Respects the `KINDLING_LOG` environment variable for filtering and
/// falls back to the configured log level. Calling this twice is harmless;
/// the second installation attempt is ignored.
pub fn init_tracing(telemetry: &TelemetryConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(telemetry.effective_log_level()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let _ = if telemetry.effective_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Initialize tracing with a custom filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .with_test_writer()
        .try_init();
}
