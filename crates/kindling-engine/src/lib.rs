//! # kindling-engine
//!
//! Picks seed users that maximize adoption of a promoted item and simulates
//! how adoption and the friendship graph evolve round by round.
//!
//! - [`graph`]: the mutable undirected snapshot with per-node live/test state.
//! - [`influence`]: buying probability, the one-hop influence cone, greedy selection.
//! - [`growth`]: histogram calibration, edge-formation models, pairwise growth.
//! - [`cascade`]: multi-round adoption spread, optionally interleaved with growth.
//! - [`engine`] / [`campaign`]: the configured facade and the per-item runner.

pub mod campaign;
pub mod cascade;
pub mod engine;
pub mod graph;
pub mod growth;
pub mod influence;
mod ratio;

pub use campaign::{CampaignOutcome, CampaignRunner};
pub use cascade::{CascadeReport, CascadeSimulator};
pub use engine::AdoptionEngine;
pub use graph::{EngagementRecord, GraphSnapshot};
pub use growth::{EdgeFormationModel, GraphGrowthSimulator, Histogram, HistogramCalibrator};
pub use influence::{BuyingProbabilityModel, GreedySeedSelector, InfluenceConeEstimator, SeedSet};
