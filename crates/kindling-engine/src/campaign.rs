//! Per-item promotion campaigns: select seeds on a pre-grown graph, then
//! spread adoption on an isolated copy of the real one.

use std::sync::Arc;

use kindling_core::types::ItemId;
use kindling_core::{Cancellable, CancellationToken, KindlingConfig, KindlingResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cascade::{CascadeReport, CascadeSimulator};
use crate::graph::{EngagementRecord, GraphSnapshot};
use crate::growth::{formation, EdgeFormationModel, GraphGrowthSimulator};
use crate::influence::{BuyingProbabilityModel, GreedySeedSelector, InfluenceConeEstimator, SeedSet};

/// Result of promoting one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignOutcome {
    pub item_id: ItemId,
    pub seeds: SeedSet,
    pub cascade: CascadeReport,
}

/// Runs the selection-then-cascade workflow for a batch of items.
///
/// Every item works on its own deep copies of the selection graph and the
/// base graph, and draws from its own RNG seeded with `base_seed + index + 1`
/// (the pre-growth uses `base_seed` itself). Items therefore run in parallel
/// with outcomes that do not depend on scheduling.
#[derive(Debug, Clone)]
pub struct CampaignRunner {
    config: KindlingConfig,
}

impl CampaignRunner {
    /// Fails with `ConfigError::ValidationFailed` on an invalid `config`.
    pub fn new(config: KindlingConfig) -> KindlingResult<Self> {
        KindlingConfig::validate(&config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &KindlingConfig {
        &self.config
    }

    /// Run every item in `items`. See [`run_with_cancel`](Self::run_with_cancel).
    pub fn run(
        &self,
        base: &GraphSnapshot,
        previous: &GraphSnapshot,
        items: &[ItemId],
        engagement: &[EngagementRecord],
    ) -> KindlingResult<Vec<CampaignOutcome>> {
        self.run_with_cancel(base, previous, items, engagement, &CancellationToken::new())
    }

    /// Build the configured formation model from `(base, previous)`, grow a
    /// copy of `base` for `selection_pregrowth_rounds` rounds, then for each
    /// item pick seeds on that grown copy and cascade on a fresh copy of
    /// `base`. Outcomes come back in `items` order.
    pub fn run_with_cancel<C: Cancellable + Sync + ?Sized>(
        &self,
        base: &GraphSnapshot,
        previous: &GraphSnapshot,
        items: &[ItemId],
        engagement: &[EngagementRecord],
        cancel: &C,
    ) -> KindlingResult<Vec<CampaignOutcome>> {
        let growth_config = &self.config.growth;
        let base_seed = self
            .config
            .cascade
            .rng_seed
            .unwrap_or_else(rand::random::<u64>);
        let model = formation::from_config(growth_config, base, previous)?;

        let mut selection_graph = base.clone();
        let pregrowth_rounds = growth_config.effective_selection_pregrowth_rounds();
        GraphGrowthSimulator::new(growth_config.effective_pair_enumeration()).simulate(
            &mut selection_graph,
            model.as_ref(),
            pregrowth_rounds,
            &mut StdRng::seed_from_u64(base_seed),
        )?;
        info!(
            items = items.len(),
            base_seed,
            model = model.name(),
            pregrowth_rounds,
            selection_edges = selection_graph.edge_count(),
            "campaign started"
        );

        let outcomes = items
            .par_iter()
            .enumerate()
            .map(|(index, &item_id)| {
                let seed = base_seed.wrapping_add(index as u64 + 1);
                self.run_item(base, &selection_graph, &model, item_id, engagement, seed, cancel)
            })
            .collect::<KindlingResult<Vec<_>>>()?;

        info!(items = outcomes.len(), "campaign finished");
        Ok(outcomes)
    }

    #[allow(clippy::too_many_arguments)]
    fn run_item<C: Cancellable + Sync + ?Sized>(
        &self,
        base: &GraphSnapshot,
        selection_graph: &GraphSnapshot,
        model: &Arc<dyn EdgeFormationModel>,
        item_id: ItemId,
        engagement: &[EngagementRecord],
        seed: u64,
        cancel: &C,
    ) -> KindlingResult<CampaignOutcome> {
        let buying = BuyingProbabilityModel::from_config(&self.config.influence);

        let mut selection = selection_graph.clone();
        selection.reset_attributes();
        selection.attach_engagement(item_id, engagement)?;
        let seeds = GreedySeedSelector::new(InfluenceConeEstimator::new(buying)).select_with_cancel(
            &mut selection,
            self.config.influence.effective_seed_count(),
            cancel,
        )?;

        let mut live = base.clone();
        live.reset_attributes();
        live.attach_engagement(item_id, engagement)?;

        let mut simulator = CascadeSimulator::new(buying);
        if self.config.cascade.effective_grow_between_rounds() {
            simulator = simulator.with_growth(
                Arc::clone(model),
                self.config.growth.effective_pair_enumeration(),
            );
        }
        let cascade = simulator.run_with_cancel(
            &mut live,
            seeds.as_slice(),
            self.config.cascade.effective_rounds(),
            &mut StdRng::seed_from_u64(seed),
            cancel,
        )?;

        debug!(
            item_id,
            seeds = ?seeds.as_slice(),
            infected = cascade.total_infected(),
            "campaign item finished"
        );
        Ok(CampaignOutcome {
            item_id,
            seeds,
            cascade,
        })
    }
}
