//! Top-level Kindling configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CascadeConfig, GrowthConfig, GrowthModelKind, InfluenceConfig, TelemetryConfig};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`KINDLING_*`)
/// 3. Project config (`kindling.toml` in the given directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KindlingConfig {
    pub influence: InfluenceConfig,
    pub growth: GrowthConfig,
    pub cascade: CascadeConfig,
    pub telemetry: TelemetryConfig,
}

/// Caller-supplied values that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub seed_count: Option<usize>,
    pub rounds: Option<usize>,
    pub rng_seed: Option<u64>,
    pub growth_model: Option<GrowthModelKind>,
}

impl KindlingConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &KindlingConfig) -> Result<(), ConfigError> {
        if let Some(scale) = config.influence.engagement_scale {
            if !(scale > 0.0 && scale.is_finite()) {
                return Err(ConfigError::ValidationFailed {
                    field: "influence.engagement_scale".to_string(),
                    message: "must be a positive finite number".to_string(),
                });
            }
        }
        if config.influence.seed_count == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "influence.seed_count".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(p) = config.growth.uniform_probability {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::ValidationFailed {
                    field: "growth.uniform_probability".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the lower layer stays in effect.
    fn apply_env_overrides(config: &mut KindlingConfig) {
        if let Ok(val) = std::env::var("KINDLING_SEED_COUNT") {
            if let Ok(v) = val.parse::<usize>() {
                config.influence.seed_count = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KINDLING_ENGAGEMENT_SCALE") {
            if let Ok(v) = val.parse::<f64>() {
                config.influence.engagement_scale = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KINDLING_UNIFORM_PROBABILITY") {
            if let Ok(v) = val.parse::<f64>() {
                config.growth.uniform_probability = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KINDLING_GROWTH_MODEL") {
            if let Some(kind) = GrowthModelKind::from_str_name(&val) {
                config.growth.model = Some(kind);
            }
        }
        if let Ok(val) = std::env::var("KINDLING_ROUNDS") {
            if let Ok(v) = val.parse::<usize>() {
                config.cascade.rounds = Some(v);
            }
        }
        if let Ok(val) = std::env::var("KINDLING_RNG_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                config.cascade.rng_seed = Some(v);
            }
        }
    }

    /// Apply programmatic overrides (highest priority).
    pub fn apply_overrides(config: &mut KindlingConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.seed_count {
            config.influence.seed_count = Some(v);
        }
        if let Some(v) = overrides.rounds {
            config.cascade.rounds = Some(v);
        }
        if let Some(v) = overrides.rng_seed {
            config.cascade.rng_seed = Some(v);
        }
        if let Some(v) = overrides.growth_model {
            config.growth.model = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
