//! One-hop influence cone: a cheap proxy for the spread of a seed set.

use std::collections::BTreeSet;

use kindling_core::errors::GraphError;
use kindling_core::UserId;

use super::buying::{BuyingProbabilityModel, Exposure};
use crate::graph::{GraphSnapshot, ScratchGuard};

/// Estimates spread as `|S|` plus the test buying probability of every
/// distinct friend of the seeds, computed as if only the seeds had adopted.
///
/// This is not a cascade expectation. It looks one hop out and nothing more.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfluenceConeEstimator {
    buying: BuyingProbabilityModel,
}

impl InfluenceConeEstimator {
    pub fn new(buying: BuyingProbabilityModel) -> Self {
        Self { buying }
    }

    pub fn buying_model(&self) -> &BuyingProbabilityModel {
        &self.buying
    }

    /// Influence cone of `seeds`. The empty set scores 0.
    ///
    /// Seeds are marked `infected_test` through a [`ScratchGuard`], so the
    /// flags are released even when the estimate fails part-way. The friend
    /// sum runs in ascending id order, keeping the float result identical
    /// across runs.
    pub fn estimate(&self, seeds: &[UserId], graph: &mut GraphSnapshot) -> Result<f64, GraphError> {
        if seeds.is_empty() {
            return Ok(0.0);
        }

        let size = seeds.iter().collect::<BTreeSet<_>>().len() as f64;
        let mut guard = ScratchGuard::acquire(graph, seeds)?;

        let mut neighborhood = BTreeSet::new();
        for &seed in seeds {
            neighborhood.extend(guard.neighbors(seed)?);
        }

        let mut cone = size;
        for friend in neighborhood {
            cone += self.buying.compute(&mut guard, friend, Exposure::Test)?;
        }
        Ok(cone)
    }
}
