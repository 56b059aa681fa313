//! Round-by-round Bernoulli adoption with optional growth between rounds.

use std::fmt;
use std::sync::Arc;

use kindling_core::config::PairEnumeration;
use kindling_core::errors::CascadeError;
use kindling_core::{Cancellable, CancellationToken, UserId};
use rand::Rng;
use tracing::{debug, info};

use super::CascadeReport;
use crate::graph::GraphSnapshot;
use crate::growth::{EdgeFormationModel, GraphGrowthSimulator};
use crate::influence::{BuyingProbabilityModel, Exposure};

/// Spreads adoption from a seed set for a fixed number of rounds.
///
/// Each round sweeps the not-yet-infected users in ascending id order and
/// draws one uniform sample per user; a user adopts when its live buying
/// probability is strictly greater than the sample. Adoption never reverts.
/// Probabilities above 1 are used as stored, which makes adoption certain.
///
/// With a growth model attached, the graph grows after each sweep and live
/// probabilities are recomputed on the grown graph.
#[derive(Clone, Default)]
pub struct CascadeSimulator {
    buying: BuyingProbabilityModel,
    growth: Option<(Arc<dyn EdgeFormationModel>, GraphGrowthSimulator)>,
}

impl fmt::Debug for CascadeSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CascadeSimulator")
            .field("buying", &self.buying)
            .field("growth", &self.growth.as_ref().map(|(model, _)| model.name()))
            .finish()
    }
}

impl CascadeSimulator {
    pub fn new(buying: BuyingProbabilityModel) -> Self {
        Self {
            buying,
            growth: None,
        }
    }

    /// Grow the graph with `model` between rounds.
    pub fn with_growth(mut self, model: Arc<dyn EdgeFormationModel>, enumeration: PairEnumeration) -> Self {
        self.growth = Some((model, GraphGrowthSimulator::new(enumeration)));
        self
    }

    pub fn grows_between_rounds(&self) -> bool {
        self.growth.is_some()
    }

    /// Run `rounds` rounds from `seeds`.
    ///
    /// Live state already on the graph is kept, so callers running
    /// independent cascades reset attributes first.
    pub fn run<R: Rng + ?Sized>(
        &self,
        graph: &mut GraphSnapshot,
        seeds: &[UserId],
        rounds: usize,
        rng: &mut R,
    ) -> Result<CascadeReport, CascadeError> {
        self.run_with_cancel(graph, seeds, rounds, rng, &CancellationToken::new())
    }

    /// Like [`run`](Self::run), checking `cancel` before every round.
    pub fn run_with_cancel<R: Rng + ?Sized, C: Cancellable + ?Sized>(
        &self,
        graph: &mut GraphSnapshot,
        seeds: &[UserId],
        rounds: usize,
        rng: &mut R,
        cancel: &C,
    ) -> Result<CascadeReport, CascadeError> {
        // Resolve every seed before touching any state.
        for &seed in seeds {
            graph.index_of(seed)?;
        }
        for &seed in seeds {
            if let Some(node) = graph.node_mut(seed) {
                node.infected_live = true;
            }
        }
        self.buying.compute_all(graph, Exposure::Live);

        let ids: Vec<UserId> = graph.node_ids().collect();
        let mut report = CascadeReport {
            infected_per_round: Vec::with_capacity(rounds),
            newly_infected_per_round: Vec::with_capacity(rounds),
            ..CascadeReport::default()
        };

        for round in 1..=rounds {
            if cancel.is_cancelled() {
                return Err(CascadeError::Cancelled {
                    completed_rounds: round - 1,
                });
            }

            let mut newly_infected = 0usize;
            for &id in &ids {
                let Some(node) = graph.node_mut(id) else {
                    continue;
                };
                if node.infected_live {
                    continue;
                }
                let sample: f64 = rng.gen();
                if node.buying_probability_live > sample {
                    node.infected_live = true;
                    newly_infected += 1;
                }
            }

            if let Some((model, growth)) = &self.growth {
                report.growth_rounds.push(growth.step(graph, model.as_ref(), rng)?);
            }
            self.buying.compute_all(graph, Exposure::Live);

            let infected = graph.infected_count();
            debug!(round, newly_infected, infected, "cascade round");
            report.infected_per_round.push(infected);
            report.newly_infected_per_round.push(newly_infected);
        }

        report.final_infected = graph
            .node_ids()
            .filter(|&id| graph.node(id).is_some_and(|n| n.infected_live))
            .collect();
        info!(
            rounds,
            seeds = seeds.len(),
            infected = report.final_infected.len(),
            nodes = graph.node_count(),
            "cascade finished"
        );
        Ok(report)
    }
}
