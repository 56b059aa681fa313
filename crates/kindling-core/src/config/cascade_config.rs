//! Cascade simulation configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Configuration for multi-round adoption spread.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CascadeConfig {
    /// Number of spread rounds. Default: 6.
    pub rounds: Option<usize>,
    /// RNG seed. `None` seeds from OS entropy and makes runs non-reproducible.
    pub rng_seed: Option<u64>,
    /// Grow the friendship graph after every round. Default: true.
    pub grow_between_rounds: Option<bool>,
}

impl CascadeConfig {
    pub fn effective_rounds(&self) -> usize {
        self.rounds.unwrap_or(defaults::DEFAULT_ROUNDS)
    }

    pub fn effective_grow_between_rounds(&self) -> bool {
        self.grow_between_rounds
            .unwrap_or(defaults::DEFAULT_GROW_BETWEEN_ROUNDS)
    }
}
