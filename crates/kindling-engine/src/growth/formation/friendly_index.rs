//! Friendliness (recent degree growth) times chance to meet (Jaccard overlap).

use kindling_core::errors::GrowthError;
use kindling_core::UserId;

use super::EdgeFormationModel;
use crate::graph::GraphSnapshot;
use crate::ratio::ratio_or_zero;

/// `P(u ~ v) = (friendly(u) + friendly(v)) * chance_to_meet(u, v)`, clamped to `[0, 1]`.
///
/// - `friendly(n) = (deg_today(n) - deg_yesterday(n)) / deg_today(n)`, 0 for
///   users with no friends today.
/// - `chance_to_meet(u, v)` is the Jaccard similarity of yesterday's friend
///   sets, 0 when both are empty.
///
/// "Today" is the graph being grown; "yesterday" is held by the model.
/// The raw sum can reach 2, hence the clamp.
#[derive(Debug, Clone)]
pub struct FriendlyIndex {
    yesterday: GraphSnapshot,
}

impl FriendlyIndex {
    pub fn new(yesterday: GraphSnapshot) -> Self {
        Self { yesterday }
    }

    pub fn friendliness(&self, user_id: UserId, today: &GraphSnapshot) -> f64 {
        let degree_today = today.degree_or_zero(user_id) as f64;
        let degree_yesterday = self.yesterday.degree_or_zero(user_id) as f64;
        // Undefined for users with no friends today.
        ratio_or_zero(degree_today - degree_yesterday, degree_today)
    }

    pub fn chance_to_meet(&self, u: UserId, v: UserId) -> f64 {
        let left = self.yesterday.neighbors_or_empty(u);
        let right = self.yesterday.neighbors_or_empty(v);
        let shared = left.intersection(&right).count() as f64;
        let union = left.union(&right).count() as f64;
        // Undefined when neither user had friends yesterday.
        ratio_or_zero(shared, union)
    }
}

impl EdgeFormationModel for FriendlyIndex {
    fn name(&self) -> &'static str {
        "friendly_index"
    }

    fn probability(&self, u: UserId, v: UserId, current: &GraphSnapshot) -> Result<f64, GrowthError> {
        let friendly = self.friendliness(u, current) + self.friendliness(v, current);
        Ok((friendly * self.chance_to_meet(u, v)).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshots() -> (GraphSnapshot, GraphSnapshot) {
        let yesterday = GraphSnapshot::from_edges(&[(1, 2), (2, 3)]).unwrap();
        let today = GraphSnapshot::from_edges(&[(1, 2), (2, 3), (1, 3)]).unwrap();
        (today, yesterday)
    }

    #[test]
    fn friendliness_is_recent_degree_share() {
        let (today, yesterday) = snapshots();
        let model = FriendlyIndex::new(yesterday);
        assert_eq!(model.friendliness(1, &today), 0.5);
        assert_eq!(model.friendliness(2, &today), 0.0);
        assert_eq!(model.friendliness(42, &today), 0.0);
    }

    #[test]
    fn chance_to_meet_is_jaccard_overlap() {
        let (_, yesterday) = snapshots();
        let model = FriendlyIndex::new(yesterday);
        assert_eq!(model.chance_to_meet(1, 3), 1.0);
        assert_eq!(model.chance_to_meet(1, 2), 0.0);
        assert_eq!(model.chance_to_meet(8, 9), 0.0);
    }

    #[test]
    fn probability_is_clamped() {
        let (today, yesterday) = snapshots();
        let model = FriendlyIndex::new(yesterday);
        // (0.5 + 0.5) * 1.0
        assert_eq!(model.probability(1, 3, &today).unwrap(), 1.0);
        assert_eq!(model.probability(1, 2, &today).unwrap(), 0.0);

        let yesterday = GraphSnapshot::from_edges(&[(1, 5), (2, 5)]).unwrap();
        let today = GraphSnapshot::from_edges(&[(1, 5), (2, 5), (1, 6), (2, 6), (1, 7), (2, 7)])
            .unwrap();
        let model = FriendlyIndex::new(yesterday);
        // Raw value (2/3 + 2/3) * 1.0 exceeds 1.
        assert_eq!(model.probability(1, 2, &today).unwrap(), 1.0);
    }
}
