//! Empirical P(new edge | common-neighbour count) from two successive snapshots.

use kindling_core::errors::GrowthError;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::graph::GraphSnapshot;

/// Distribution over common-neighbour counts of edges that formed between
/// two snapshots. Bucket `k` holds the share of new edges whose endpoints
/// had exactly `k` friends in common in the earlier snapshot.
///
/// Built once per snapshot pair and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    buckets: Vec<f64>,
    new_edge_count: usize,
}

impl Histogram {
    /// Probability for `common_neighbors`, or `OutOfDomain` past the last bucket.
    pub fn probability(&self, common_neighbors: usize) -> Result<f64, GrowthError> {
        self.buckets
            .get(common_neighbors)
            .copied()
            .ok_or(GrowthError::OutOfDomain {
                common_neighbors,
                max_bucket: self.max_bucket(),
            })
    }

    /// Largest common-neighbour count the histogram was calibrated for.
    pub fn max_bucket(&self) -> usize {
        self.buckets.len().saturating_sub(1)
    }

    pub fn buckets(&self) -> &[f64] {
        &self.buckets
    }

    /// Number of edges present in the later snapshot but not the earlier one.
    pub fn new_edge_count(&self) -> usize {
        self.new_edge_count
    }
}

/// Builds a [`Histogram`] from a `(current, previous)` snapshot pair.
pub struct HistogramCalibrator;

impl HistogramCalibrator {
    /// Count, for every edge of `current` missing from `previous`, how many
    /// common neighbours its endpoints had in `previous`, then normalize.
    ///
    /// The domain is `0..=max_degree(previous)`. With no new edges the
    /// distribution is undefined and `DegenerateDistribution` is returned.
    pub fn build(
        current: &GraphSnapshot,
        previous: &GraphSnapshot,
    ) -> Result<Histogram, GrowthError> {
        let mut counts = vec![0usize; previous.max_degree() + 1];
        let mut new_edge_count = 0usize;

        for (u, v) in current.edges() {
            if previous.has_edge(u, v) {
                continue;
            }
            // Common neighbours never exceed the smaller endpoint degree.
            let k = previous.common_neighbor_count(u, v);
            counts[k] += 1;
            new_edge_count += 1;
        }

        if new_edge_count == 0 {
            return Err(GrowthError::DegenerateDistribution {
                previous_nodes: previous.node_count(),
                previous_edges: previous.edge_count(),
            });
        }

        let total = new_edge_count as f64;
        let buckets: Vec<f64> = counts.into_iter().map(|c| c as f64 / total).collect();
        info!(
            new_edge_count,
            max_bucket = buckets.len() - 1,
            "edge-growth histogram calibrated"
        );

        Ok(Histogram {
            buckets,
            new_edge_count,
        })
    }
}
