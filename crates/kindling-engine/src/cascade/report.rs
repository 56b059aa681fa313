//! Per-round results of a cascade run.

use kindling_core::UserId;
use serde::{Deserialize, Serialize};

use crate::growth::GrowthRound;

/// Outcome of [`CascadeSimulator::run`](super::CascadeSimulator::run).
///
/// `infected_per_round[t]` is the cumulative infected count after round
/// `t + 1`; the sequence is non-decreasing and bounded by the node count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CascadeReport {
    pub infected_per_round: Vec<usize>,
    pub newly_infected_per_round: Vec<usize>,
    /// One entry per round when growth runs between rounds, empty otherwise.
    pub growth_rounds: Vec<GrowthRound>,
    /// Every adopter at the end of the run, in ascending id order.
    pub final_infected: Vec<UserId>,
}

impl CascadeReport {
    pub fn rounds(&self) -> usize {
        self.infected_per_round.len()
    }

    /// Cumulative count after the last round, or the seed count for a zero-round run.
    pub fn total_infected(&self) -> usize {
        self.final_infected.len()
    }
}
