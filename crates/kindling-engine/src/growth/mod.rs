//! Graph growth: calibrating new-edge probabilities from two snapshots and
//! stochastically adding edges round by round.

pub mod formation;
pub mod histogram;
pub mod matrix;
pub mod propensity;
pub mod simulator;

pub use formation::{
    CommonNeighborHistogram, EdgeFormationModel, FriendlyIndex, PairEstimate, UniformConstant,
};
pub use histogram::{Histogram, HistogramCalibrator};
pub use matrix::{EdgeProbabilityMatrix, UserPair};
pub use propensity::degree_growth_propensity;
pub use simulator::{GraphGrowthSimulator, GrowthRound};
