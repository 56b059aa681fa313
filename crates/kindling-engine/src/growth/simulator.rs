//! Stochastic edge addition, round by round.

use kindling_core::config::PairEnumeration;
use kindling_core::errors::{GraphError, GrowthError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::formation::EdgeFormationModel;
use super::matrix::EdgeProbabilityMatrix;
use crate::graph::GraphSnapshot;

/// What one growth round did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthRound {
    pub pairs_considered: usize,
    pub edges_added: usize,
}

/// Grows a graph by sampling every candidate pair once per round.
///
/// With [`PairEnumeration::AllPairs`] a round costs `O(|V|^2)` model
/// evaluations and draws, which dominates every workflow that grows the graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphGrowthSimulator {
    enumeration: PairEnumeration,
}

impl GraphGrowthSimulator {
    pub fn new(enumeration: PairEnumeration) -> Self {
        Self { enumeration }
    }

    pub fn enumeration(&self) -> PairEnumeration {
        self.enumeration
    }

    /// Draw one uniform sample per unconnected pair of `matrix`, in pair
    /// order, and add the edge when the sample is below the pair's probability.
    ///
    /// Edges are only ever added, so the edge count never decreases.
    pub fn grow<R: Rng + ?Sized>(
        &self,
        graph: &mut GraphSnapshot,
        matrix: &EdgeProbabilityMatrix,
        rng: &mut R,
    ) -> Result<GrowthRound, GraphError> {
        let mut round = GrowthRound {
            pairs_considered: 0,
            edges_added: 0,
        };
        for ((i, j), p) in matrix.iter() {
            if graph.has_edge(i, j) {
                continue;
            }
            round.pairs_considered += 1;
            let sample: f64 = rng.gen();
            if sample < p && graph.add_edge(i, j)? {
                round.edges_added += 1;
            }
        }
        Ok(round)
    }

    /// Build a fresh matrix from the current graph and grow once.
    pub fn step<R: Rng + ?Sized>(
        &self,
        graph: &mut GraphSnapshot,
        model: &dyn EdgeFormationModel,
        rng: &mut R,
    ) -> Result<GrowthRound, GrowthError> {
        let matrix = EdgeProbabilityMatrix::build(graph, model, self.enumeration)?;
        let masked = matrix.fallback_count();
        if masked > 0 {
            warn!(
                model = model.name(),
                masked,
                "out-of-domain lookups answered by fallback policy"
            );
        }

        let round = self.grow(graph, &matrix, rng)?;
        debug!(
            pairs_considered = round.pairs_considered,
            edges_added = round.edges_added,
            edges = graph.edge_count(),
            "growth round"
        );
        Ok(round)
    }

    /// Run `rounds` growth steps, mutating `graph` in place.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        graph: &mut GraphSnapshot,
        model: &dyn EdgeFormationModel,
        rounds: usize,
        rng: &mut R,
    ) -> Result<Vec<GrowthRound>, GrowthError> {
        let edges_before = graph.edge_count();
        let mut report = Vec::with_capacity(rounds);
        for _ in 0..rounds {
            report.push(self.step(graph, model, rng)?);
        }
        info!(
            model = model.name(),
            rounds,
            edges_before,
            edges_after = graph.edge_count(),
            "graph growth finished"
        );
        Ok(report)
    }
}
