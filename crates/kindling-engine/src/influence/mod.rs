//! Influence maximization: buying probability, the one-hop influence cone,
//! and greedy hill-climbing seed selection.

pub mod buying;
pub mod cone;
pub mod greedy;

pub use buying::{BuyingProbabilityModel, Exposure};
pub use cone::InfluenceConeEstimator;
pub use greedy::{GreedySeedSelector, SeedSet};
