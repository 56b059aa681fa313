//! Greedy hill-climbing seed selection over the influence cone.

use kindling_core::errors::SelectionError;
use kindling_core::types::collections::FxHashSet;
use kindling_core::{Cancellable, CancellationToken, UserId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::cone::InfluenceConeEstimator;
use crate::graph::GraphSnapshot;

/// Seeds in the order they were picked, with the marginal gain of each pick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSet {
    seeds: Vec<UserId>,
    marginal_gains: Vec<f64>,
    estimated_spread: f64,
}

impl SeedSet {
    pub fn as_slice(&self) -> &[UserId] {
        &self.seeds
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.seeds.contains(&user_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = UserId> + '_ {
        self.seeds.iter().copied()
    }

    /// Gain of each pick over the set chosen before it, in pick order.
    pub fn marginal_gains(&self) -> &[f64] {
        &self.marginal_gains
    }

    /// Influence cone of the full set.
    pub fn estimated_spread(&self) -> f64 {
        self.estimated_spread
    }

    pub fn into_vec(self) -> Vec<UserId> {
        self.seeds
    }
}

/// Picks `k` seeds by repeatedly adding the node with the largest marginal
/// influence-cone gain.
///
/// Every round rescans all remaining nodes in ascending id order. A candidate
/// replaces the incumbent only on a strictly larger gain, so ties go to the
/// smallest id. That ordering is part of the contract: it makes seed sets
/// reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySeedSelector {
    estimator: InfluenceConeEstimator,
}

impl GreedySeedSelector {
    pub fn new(estimator: InfluenceConeEstimator) -> Self {
        Self { estimator }
    }

    /// Select `k` seeds. Fails with `InvalidSeedCount` unless `1 <= k <= |V|`.
    pub fn select(&self, graph: &mut GraphSnapshot, k: usize) -> Result<SeedSet, SelectionError> {
        self.select_with_cancel(graph, k, &CancellationToken::new())
    }

    /// Like [`select`](Self::select), checking `cancel` before every estimate.
    pub fn select_with_cancel<C: Cancellable + ?Sized>(
        &self,
        graph: &mut GraphSnapshot,
        k: usize,
        cancel: &C,
    ) -> Result<SeedSet, SelectionError> {
        let node_count = graph.node_count();
        if k == 0 || k > node_count {
            return Err(SelectionError::InvalidSeedCount {
                requested: k,
                node_count,
            });
        }

        let candidates: Vec<UserId> = graph.node_ids().collect();
        let mut chosen: Vec<UserId> = Vec::with_capacity(k);
        let mut chosen_set: FxHashSet<UserId> = FxHashSet::default();
        let mut marginal_gains = Vec::with_capacity(k);

        for round in 0..k {
            if cancel.is_cancelled() {
                return Err(SelectionError::Cancelled);
            }
            let baseline = self.estimator.estimate(&chosen, graph)?;

            // Trial set is `chosen` plus one slot rewritten per candidate.
            let mut trial = chosen.clone();
            trial.push(0);
            let last = trial.len() - 1;

            let mut best: Option<(UserId, f64)> = None;
            for &candidate in &candidates {
                if chosen_set.contains(&candidate) {
                    continue;
                }
                if cancel.is_cancelled() {
                    return Err(SelectionError::Cancelled);
                }
                trial[last] = candidate;
                let gain = self.estimator.estimate(&trial, graph)? - baseline;
                if best.map_or(true, |(_, best_gain)| gain > best_gain) {
                    best = Some((candidate, gain));
                }
            }

            let Some((seed, gain)) = best else {
                return Err(SelectionError::InvalidSeedCount {
                    requested: k,
                    node_count,
                });
            };
            debug!(round, seed, gain, "seed picked");
            chosen.push(seed);
            chosen_set.insert(seed);
            marginal_gains.push(gain);
        }

        let estimated_spread = self.estimator.estimate(&chosen, graph)?;
        info!(k, seeds = ?chosen, estimated_spread, "seed selection complete");

        Ok(SeedSet {
            seeds: chosen,
            marginal_gains,
            estimated_spread,
        })
    }
}
