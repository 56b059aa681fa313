//! Subscriber installation is idempotent.

use kindling_core::config::KindlingConfig;
use kindling_core::tracing_setup::{init_tracing, init_tracing_with_filter};

#[test]
fn repeated_initialization_is_harmless() {
    let config = KindlingConfig::from_toml("[telemetry]\nlog_level = \"debug\"\njson = true").unwrap();
    assert!(config.telemetry.effective_json());
    init_tracing(&config.telemetry);
    init_tracing(&config.telemetry);
    init_tracing_with_filter("kindling_core=trace");
    tracing::info!(target: "kindling_core", "still logging");
}
