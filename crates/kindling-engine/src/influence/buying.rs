//! Adoption probability from social exposure and historical engagement.

use kindling_core::config::InfluenceConfig;
use kindling_core::config::defaults::DEFAULT_ENGAGEMENT_SCALE;
use kindling_core::errors::GraphError;
use kindling_core::UserId;
use petgraph::graph::NodeIndex;

use crate::graph::GraphSnapshot;
use crate::ratio::ratio_or_zero;

/// Which infection flag and probability slot a computation reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    /// `infected_live` / `buying_probability_live`.
    Live,
    /// `infected_test` / `buying_probability_test` (influence cone scratch).
    Test,
}

/// Converts a node's infected-friend share and play count into a buying probability.
///
/// ```text
/// p = bt / nt                         if h == 0
/// p = (h * bt) / (scale * nt)         otherwise
/// ```
///
/// where `nt` is the degree, `bt` the number of infected friends and `h` the
/// node's engagement. Values are not clamped: a heavy listener with many
/// infected friends can exceed 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuyingProbabilityModel {
    engagement_scale: f64,
}

impl BuyingProbabilityModel {
    pub fn new(engagement_scale: f64) -> Self {
        Self { engagement_scale }
    }

    pub fn from_config(config: &InfluenceConfig) -> Self {
        Self::new(config.effective_engagement_scale())
    }

    pub fn engagement_scale(&self) -> f64 {
        self.engagement_scale
    }

    /// Compute and store the buying probability of `user_id`.
    pub fn compute(
        &self,
        graph: &mut GraphSnapshot,
        user_id: UserId,
        exposure: Exposure,
    ) -> Result<f64, GraphError> {
        let idx = graph.index_of(user_id)?;
        Ok(self.compute_at(graph, idx, exposure))
    }

    /// Recompute and store the buying probability of every node.
    pub fn compute_all(&self, graph: &mut GraphSnapshot, exposure: Exposure) {
        let indices: Vec<NodeIndex> = graph.graph.node_indices().collect();
        for idx in indices {
            self.compute_at(graph, idx, exposure);
        }
    }

    pub(crate) fn compute_at(
        &self,
        graph: &mut GraphSnapshot,
        idx: NodeIndex,
        exposure: Exposure,
    ) -> f64 {
        let mut degree = 0usize;
        let mut infected = 0usize;
        for n in graph.graph.neighbors(idx) {
            degree += 1;
            let friend = &graph.graph[n];
            let flag = match exposure {
                Exposure::Live => friend.infected_live,
                Exposure::Test => friend.infected_test,
            };
            if flag {
                infected += 1;
            }
        }

        let node = &mut graph.graph[idx];
        let probability = self.probability(infected, degree, node.engagement);
        match exposure {
            Exposure::Live => node.buying_probability_live = probability,
            Exposure::Test => node.buying_probability_test = probability,
        }
        probability
    }

    /// The formula itself. An isolated node (`degree == 0`) gets 0.
    pub fn probability(&self, infected_friends: usize, degree: usize, engagement: u64) -> f64 {
        let bt = infected_friends as f64;
        let nt = degree as f64;
        if engagement == 0 {
            ratio_or_zero(bt, nt)
        } else {
            ratio_or_zero(engagement as f64 * bt, self.engagement_scale * nt)
        }
    }
}

impl Default for BuyingProbabilityModel {
    fn default() -> Self {
        Self::new(DEFAULT_ENGAGEMENT_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_node_has_zero_probability() {
        let model = BuyingProbabilityModel::default();
        assert_eq!(model.probability(0, 0, 0), 0.0);
        assert_eq!(model.probability(0, 0, 500), 0.0);
    }

    #[test]
    fn engagement_scales_the_infected_share() {
        let model = BuyingProbabilityModel::default();
        assert_eq!(model.probability(1, 2, 0), 0.5);
        assert_eq!(model.probability(1, 2, 500), 0.25);
    }

    #[test]
    fn heavy_engagement_is_not_clamped() {
        let model = BuyingProbabilityModel::default();
        assert!(model.probability(2, 2, 3000) > 1.0);
    }

    #[test]
    fn live_and_test_slots_are_independent() {
        let mut graph = GraphSnapshot::from_edges(&[(1, 2), (2, 3)]).unwrap();
        graph.node_mut(1).unwrap().infected_live = true;
        graph.node_mut(3).unwrap().infected_test = true;

        let model = BuyingProbabilityModel::default();
        let live = model.compute(&mut graph, 2, Exposure::Live).unwrap();
        let test = model.compute(&mut graph, 2, Exposure::Test).unwrap();
        assert_eq!(live, 0.5);
        assert_eq!(test, 0.5);

        graph.node_mut(3).unwrap().infected_live = true;
        model.compute(&mut graph, 2, Exposure::Live).unwrap();
        let node = graph.node(2).unwrap();
        assert_eq!(node.buying_probability_live, 1.0);
        assert_eq!(node.buying_probability_test, 0.5);
    }
}
