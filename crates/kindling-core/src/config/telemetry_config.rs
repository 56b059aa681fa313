use serde::{Deserialize, Serialize};

use super::defaults;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: Option<String>,
    /// Emit JSON-formatted log lines.
    pub json: Option<bool>,
}

impl TelemetryConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(defaults::DEFAULT_JSON_LOGS)
    }
}
