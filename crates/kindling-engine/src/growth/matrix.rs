//! Pairwise edge-formation probabilities for one growth round.

use std::collections::BTreeSet;

use kindling_core::config::PairEnumeration;
use kindling_core::errors::GrowthError;
use kindling_core::UserId;
use rayon::prelude::*;
use tracing::debug;

use super::formation::{EdgeFormationModel, PairEstimate};
use crate::graph::GraphSnapshot;

/// An unordered user pair, always stored as `(smaller, larger)`.
pub type UserPair = (UserId, UserId);

/// Probabilities for every candidate pair without an edge, sorted by pair.
///
/// Built from a frozen view of the graph: the growth round that consumes it
/// does not feed its own additions back into the probabilities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeProbabilityMatrix {
    entries: Vec<(UserPair, f64)>,
    fallbacks: usize,
}

impl EdgeProbabilityMatrix {
    /// Evaluate `model` on every candidate pair of `graph`.
    ///
    /// Evaluation runs on the rayon pool and is collected back in pair order,
    /// so the result matches a sequential build. Any value outside `[0, 1]`
    /// fails the build with `InvalidProbability`.
    pub fn build(
        graph: &GraphSnapshot,
        model: &dyn EdgeFormationModel,
        enumeration: PairEnumeration,
    ) -> Result<Self, GrowthError> {
        let pairs = candidate_pairs(graph, enumeration);
        let estimates = pairs
            .par_iter()
            .map(|&(u, v)| -> Result<(UserPair, PairEstimate), GrowthError> {
                let estimate = model.evaluate(u, v, graph)?;
                if !(0.0..=1.0).contains(&estimate.probability) {
                    return Err(GrowthError::InvalidProbability {
                        value: estimate.probability,
                    });
                }
                Ok(((u, v), estimate))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let fallbacks = estimates.iter().filter(|(_, e)| e.fallback).count();
        let entries: Vec<(UserPair, f64)> = estimates
            .into_iter()
            .map(|(pair, e)| (pair, e.probability))
            .collect();

        debug!(
            model = model.name(),
            enumeration = ?enumeration,
            pairs = entries.len(),
            fallbacks,
            "edge probability matrix built"
        );
        Ok(Self { entries, fallbacks })
    }

    /// Pairs of this build whose probability came from the fallback policy.
    pub fn fallback_count(&self) -> usize {
        self.fallbacks
    }

    /// Probability for the pair, in either argument order.
    pub fn get(&self, i: UserId, j: UserId) -> Option<f64> {
        let key = if i < j { (i, j) } else { (j, i) };
        self.entries
            .binary_search_by(|(pair, _)| pair.cmp(&key))
            .ok()
            .map(|pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UserPair, f64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Unconnected pairs `(i, j)`, `i < j`, in ascending order.
fn candidate_pairs(graph: &GraphSnapshot, enumeration: PairEnumeration) -> Vec<UserPair> {
    match enumeration {
        PairEnumeration::AllPairs => {
            let ids: Vec<UserId> = graph.node_ids().collect();
            let mut pairs = Vec::new();
            for (pos, &i) in ids.iter().enumerate() {
                for &j in &ids[pos + 1..] {
                    if !graph.has_edge(i, j) {
                        pairs.push((i, j));
                    }
                }
            }
            pairs
        }
        PairEnumeration::SharedNeighbor => {
            let mut pairs = BTreeSet::new();
            for w in graph.node_ids() {
                let friends: Vec<UserId> = graph.neighbors_or_empty(w).into_iter().collect();
                for (pos, &i) in friends.iter().enumerate() {
                    for &j in &friends[pos + 1..] {
                        if !graph.has_edge(i, j) {
                            pairs.insert((i, j));
                        }
                    }
                }
            }
            pairs.into_iter().collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::growth::formation::UniformConstant;

    struct Fixed(f64);

    impl EdgeFormationModel for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn probability(&self, _u: UserId, _v: UserId, _g: &GraphSnapshot) -> Result<f64, GrowthError> {
            Ok(self.0)
        }
    }

    #[test]
    fn all_pairs_skips_existing_edges() {
        let graph = GraphSnapshot::from_edges(&[(1, 2), (2, 3), (3, 4)]).unwrap();
        let model = UniformConstant::new(0.3).unwrap();
        let matrix = EdgeProbabilityMatrix::build(&graph, &model, PairEnumeration::AllPairs).unwrap();

        let pairs: Vec<UserPair> = matrix.iter().map(|(pair, _)| pair).collect();
        assert_eq!(pairs, vec![(1, 3), (1, 4), (2, 4)]);
        assert_eq!(matrix.get(4, 1), Some(0.3));
        assert_eq!(matrix.get(1, 2), None);
    }

    #[test]
    fn shared_neighbor_keeps_two_hop_pairs_only() {
        let graph = GraphSnapshot::from_edges(&[(1, 2), (2, 3), (3, 4)]).unwrap();
        let model = UniformConstant::new(0.3).unwrap();
        let matrix =
            EdgeProbabilityMatrix::build(&graph, &model, PairEnumeration::SharedNeighbor).unwrap();

        let pairs: Vec<UserPair> = matrix.iter().map(|(pair, _)| pair).collect();
        assert_eq!(pairs, vec![(1, 3), (2, 4)]);
    }

    #[test]
    fn out_of_range_model_output_fails() {
        let graph = GraphSnapshot::from_edges(&[(1, 2), (2, 3)]).unwrap();
        let err = EdgeProbabilityMatrix::build(&graph, &Fixed(1.5), PairEnumeration::AllPairs)
            .unwrap_err();
        assert!(matches!(err, GrowthError::InvalidProbability { .. }));
    }

    #[test]
    fn fallbacks_are_counted_per_build() {
        use crate::growth::formation::CommonNeighborHistogram;
        use crate::growth::histogram::HistogramCalibrator;
        use kindling_core::config::OutOfDomainPolicy;

        // Calibrated range is 0..=1 common neighbours.
        let previous = GraphSnapshot::from_edges(&[(1, 2)]).unwrap();
        let current = GraphSnapshot::from_edges(&[(1, 2), (2, 3)]).unwrap();
        let histogram = HistogramCalibrator::build(&current, &previous).unwrap();
        // 1 and 2 share 10, 11 and 12 in the reference.
        let reference = GraphSnapshot::from_edges(&[
            (1, 10), (1, 11), (1, 12), (2, 10), (2, 11), (2, 12),
        ])
        .unwrap();
        let model = CommonNeighborHistogram::new(histogram, reference, OutOfDomainPolicy::Zero);

        let mut graph = GraphSnapshot::new();
        graph.add_node(1);
        graph.add_node(2);
        graph.add_node(3);

        // The same shared model built twice reports each build on its own.
        for _ in 0..2 {
            let matrix = EdgeProbabilityMatrix::build(&graph, &model, PairEnumeration::AllPairs).unwrap();
            assert_eq!(matrix.len(), 3);
            assert_eq!(matrix.fallback_count(), 1);
            assert_eq!(matrix.get(1, 2), Some(0.0));
        }
    }

    #[test]
    fn complete_graph_has_no_candidates() {
        let graph = GraphSnapshot::from_edges(&[(1, 2), (2, 3), (1, 3)]).unwrap();
        let matrix = EdgeProbabilityMatrix::build(&graph, &Fixed(0.5), PairEnumeration::AllPairs)
            .unwrap();
        assert!(matrix.is_empty());
    }
}
