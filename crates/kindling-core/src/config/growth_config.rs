//! Graph-growth configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which edge-formation model drives graph growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrowthModelKind {
    /// Every absent pair forms with the same constant probability.
    #[default]
    Uniform,
    /// Probability looked up by common-neighbour count in a calibrated histogram.
    CommonNeighborHistogram,
    /// Degree-growth "friendliness" times neighbourhood Jaccard similarity.
    FriendlyIndex,
}

impl GrowthModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::CommonNeighborHistogram => "common_neighbor_histogram",
            Self::FriendlyIndex => "friendly_index",
        }
    }

    /// Parse the snake_case name used in TOML and environment variables.
    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "uniform" => Some(Self::Uniform),
            "common_neighbor_histogram" => Some(Self::CommonNeighborHistogram),
            "friendly_index" => Some(Self::FriendlyIndex),
            _ => None,
        }
    }
}

/// What a histogram lookup does when the common-neighbour count exceeds its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutOfDomainPolicy {
    /// Treat the pair as having zero probability.
    #[default]
    Zero,
    /// Surface `GrowthError::OutOfDomain` to the caller.
    Error,
}

/// Which node pairs are considered for new edges in a growth round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PairEnumeration {
    /// Every unordered pair `i < j`. O(|V|²) per round.
    #[default]
    AllPairs,
    /// Only pairs sharing at least one neighbour. Changes the output distribution.
    SharedNeighbor,
}

/// Configuration for the growth subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GrowthConfig {
    /// Edge-formation model. Default: uniform.
    pub model: Option<GrowthModelKind>,
    /// Constant probability for the uniform model. Default: 0.01.
    pub uniform_probability: Option<f64>,
    /// Histogram out-of-domain policy. Default: zero.
    pub out_of_domain: Option<OutOfDomainPolicy>,
    /// Pair enumeration strategy. Default: all pairs.
    pub pair_enumeration: Option<PairEnumeration>,
    /// Growth rounds applied to the selection graph before picking seeds. Default: 7.
    pub selection_pregrowth_rounds: Option<usize>,
}

impl GrowthConfig {
    pub fn effective_model(&self) -> GrowthModelKind {
        self.model.unwrap_or_default()
    }

    pub fn effective_uniform_probability(&self) -> f64 {
        self.uniform_probability
            .unwrap_or(defaults::DEFAULT_UNIFORM_PROBABILITY)
    }

    pub fn effective_out_of_domain(&self) -> OutOfDomainPolicy {
        self.out_of_domain.unwrap_or_default()
    }

    pub fn effective_pair_enumeration(&self) -> PairEnumeration {
        self.pair_enumeration.unwrap_or_default()
    }

    pub fn effective_selection_pregrowth_rounds(&self) -> usize {
        self.selection_pregrowth_rounds
            .unwrap_or(defaults::DEFAULT_SELECTION_PREGROWTH_ROUNDS)
    }
}
