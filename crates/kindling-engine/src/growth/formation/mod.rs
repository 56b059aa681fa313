//! Edge-formation models: the probability that an absent friendship forms
//! in the next round.

pub mod common_neighbor;
pub mod friendly_index;
pub mod uniform;

use std::sync::Arc;

use kindling_core::config::{GrowthConfig, GrowthModelKind};
use kindling_core::errors::GrowthError;
use kindling_core::UserId;

use crate::graph::GraphSnapshot;

use super::histogram::HistogramCalibrator;

pub use common_neighbor::CommonNeighborHistogram;
pub use friendly_index::FriendlyIndex;
pub use uniform::UniformConstant;

/// Pairwise probability that `u` and `v` become friends next round.
///
/// `current` is the graph being grown. Models that calibrate against an
/// older or fixed snapshot hold that snapshot themselves. Implementations
/// return values in `[0, 1]` and must be shareable across threads, since
/// the probability matrix is built in parallel.
pub trait EdgeFormationModel: Send + Sync {
    fn name(&self) -> &'static str;

    fn probability(
        &self,
        u: UserId,
        v: UserId,
        current: &GraphSnapshot,
    ) -> Result<f64, GrowthError>;

    /// Like [`probability`](Self::probability), also reporting whether a
    /// fallback policy produced the value instead of calibrated data.
    fn evaluate(&self, u: UserId, v: UserId, current: &GraphSnapshot) -> Result<PairEstimate, GrowthError> {
        Ok(PairEstimate {
            probability: self.probability(u, v, current)?,
            fallback: false,
        })
    }
}

/// One model answer for a pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairEstimate {
    pub probability: f64,
    /// Set when an out-of-domain lookup was masked by the fallback policy.
    pub fallback: bool,
}

/// Build the configured model.
///
/// `current` and `previous` are the two real snapshots: the histogram model
/// calibrates on the pair and looks up common neighbours in `current`; the
/// friendly index treats `previous` as yesterday.
pub fn from_config(
    config: &GrowthConfig,
    current: &GraphSnapshot,
    previous: &GraphSnapshot,
) -> Result<Arc<dyn EdgeFormationModel>, GrowthError> {
    let model: Arc<dyn EdgeFormationModel> = match config.effective_model() {
        GrowthModelKind::Uniform => Arc::new(UniformConstant::new(
            config.effective_uniform_probability(),
        )?),
        GrowthModelKind::CommonNeighborHistogram => {
            let histogram = HistogramCalibrator::build(current, previous)?;
            Arc::new(CommonNeighborHistogram::new(
                histogram,
                current.clone(),
                config.effective_out_of_domain(),
            ))
        }
        GrowthModelKind::FriendlyIndex => Arc::new(FriendlyIndex::new(previous.clone())),
    };
    Ok(model)
}
