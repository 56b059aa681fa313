//! Configured facade over graph construction, selection, growth and cascade.

use std::path::Path;
use std::sync::Arc;

use kindling_core::config::ConfigOverrides;
use kindling_core::tracing_setup;
use kindling_core::types::ItemId;
use kindling_core::{KindlingConfig, KindlingResult, UserId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::campaign::{CampaignOutcome, CampaignRunner};
use crate::cascade::{CascadeReport, CascadeSimulator};
use crate::graph::{EngagementRecord, GraphSnapshot};
use crate::growth::{
    formation, EdgeFormationModel, GraphGrowthSimulator, GrowthRound, Histogram,
    HistogramCalibrator,
};
use crate::influence::{BuyingProbabilityModel, GreedySeedSelector, InfluenceConeEstimator, SeedSet};

/// Entry point holding the resolved configuration and the run's RNG.
///
/// Growth and cascade draws come from one `StdRng` seeded with
/// `cascade.rng_seed`. Without one, a seed is drawn once and logged so the
/// run can be replayed.
#[derive(Debug)]
pub struct AdoptionEngine {
    config: KindlingConfig,
    rng_seed: u64,
    rng: StdRng,
}

impl AdoptionEngine {
    /// Validate `config` and build. Configs from `from_toml`, `Default` or
    /// struct literals are checked here, not only those from `load`.
    pub fn new(config: KindlingConfig) -> KindlingResult<Self> {
        KindlingConfig::validate(&config)?;
        let rng_seed = config
            .cascade
            .rng_seed
            .unwrap_or_else(rand::random::<u64>);
        info!(
            rng_seed,
            configured = config.cascade.rng_seed.is_some(),
            "adoption engine seeded"
        );
        Ok(Self {
            config,
            rng_seed,
            rng: StdRng::seed_from_u64(rng_seed),
        })
    }

    /// Resolve configuration under `root` (file, environment, overrides) and build.
    pub fn from_root(root: &Path, overrides: Option<&ConfigOverrides>) -> KindlingResult<Self> {
        let config = KindlingConfig::load(root, overrides)?;
        Self::new(config)
    }

    /// Seed the RNG stream started from; pass it as `cascade.rng_seed` to replay.
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    pub fn config(&self) -> &KindlingConfig {
        &self.config
    }

    /// Install the global tracing subscriber described by `[telemetry]`.
    pub fn init_telemetry(&self) {
        tracing_setup::init_tracing(&self.config.telemetry);
    }

    /// Restart the RNG stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng_seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn buying_model(&self) -> BuyingProbabilityModel {
        BuyingProbabilityModel::from_config(&self.config.influence)
    }

    pub fn build_snapshot(&self, edges: &[(UserId, UserId)]) -> KindlingResult<GraphSnapshot> {
        let graph = GraphSnapshot::from_edges(edges)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "snapshot built"
        );
        Ok(graph)
    }

    pub fn attach_engagement(
        &self,
        graph: &mut GraphSnapshot,
        item_id: ItemId,
        table: &[EngagementRecord],
    ) -> KindlingResult<usize> {
        Ok(graph.attach_engagement(item_id, table)?)
    }

    /// Greedy selection of `k` seeds.
    pub fn run_influence_maximization(&self, graph: &mut GraphSnapshot, k: usize) -> KindlingResult<SeedSet> {
        let selector = GreedySeedSelector::new(InfluenceConeEstimator::new(self.buying_model()));
        Ok(selector.select(graph, k)?)
    }

    /// Greedy selection with the configured seed count.
    pub fn select_seeds(&self, graph: &mut GraphSnapshot) -> KindlingResult<SeedSet> {
        self.run_influence_maximization(graph, self.config.influence.effective_seed_count())
    }

    pub fn calibrate_growth(&self, current: &GraphSnapshot, previous: &GraphSnapshot) -> KindlingResult<Histogram> {
        Ok(HistogramCalibrator::build(current, previous)?)
    }

    /// The formation model named by `growth.model`, calibrated on the snapshot pair where needed.
    pub fn formation_model(
        &self,
        current: &GraphSnapshot,
        previous: &GraphSnapshot,
    ) -> KindlingResult<Arc<dyn EdgeFormationModel>> {
        Ok(formation::from_config(&self.config.growth, current, previous)?)
    }

    /// Grow `graph` in place for `rounds` rounds.
    pub fn simulate_growth(
        &mut self,
        graph: &mut GraphSnapshot,
        model: &dyn EdgeFormationModel,
        rounds: usize,
    ) -> KindlingResult<Vec<GrowthRound>> {
        let simulator = GraphGrowthSimulator::new(self.config.growth.effective_pair_enumeration());
        Ok(simulator.simulate(graph, model, rounds, &mut self.rng)?)
    }

    /// Spread adoption from `seeds`, growing with `growth` between rounds when given.
    pub fn simulate_cascade(
        &mut self,
        graph: &mut GraphSnapshot,
        seeds: &[UserId],
        rounds: usize,
        growth: Option<Arc<dyn EdgeFormationModel>>,
    ) -> KindlingResult<CascadeReport> {
        let mut simulator = CascadeSimulator::new(self.buying_model());
        if let Some(model) = growth {
            simulator = simulator.with_growth(model, self.config.growth.effective_pair_enumeration());
        }
        Ok(simulator.run(graph, seeds, rounds, &mut self.rng)?)
    }

    /// Per-item selection and cascade; see [`CampaignRunner`].
    pub fn run_campaign(
        &self,
        base: &GraphSnapshot,
        previous: &GraphSnapshot,
        items: &[ItemId],
        engagement: &[EngagementRecord],
    ) -> KindlingResult<Vec<CampaignOutcome>> {
        CampaignRunner::new(self.config.clone())?.run(base, previous, items, engagement)
    }
}
