//! Influence-maximization configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for the buying-probability model and the seed selector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InfluenceConfig {
    /// Divisor applied to engagement counts. Default: 1000.
    pub engagement_scale: Option<f64>,
    /// Number of seeds to select. Default: 5.
    pub seed_count: Option<usize>,
}

impl InfluenceConfig {
    pub fn effective_engagement_scale(&self) -> f64 {
        self.engagement_scale
            .unwrap_or(defaults::DEFAULT_ENGAGEMENT_SCALE)
    }

    pub fn effective_seed_count(&self) -> usize {
        self.seed_count.unwrap_or(defaults::DEFAULT_SEED_COUNT)
    }
}
