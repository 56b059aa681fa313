/// Kindling version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the project-level configuration file.
pub const CONFIG_FILENAME: &str = "kindling.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "KINDLING_LOG";

/// Prefix for all environment-variable configuration overrides.
pub const ENV_PREFIX: &str = "KINDLING_";
