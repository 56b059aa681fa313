//! Synthetic social graphs for benchmarks.
//! Deterministic: same seed gives the same snapshots and engagement table.

use kindling_core::types::ItemId;
use kindling_core::UserId;
use kindling_engine::{EngagementRecord, GraphSnapshot};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixture size presets.
#[derive(Debug, Clone, Copy)]
pub enum FixtureSize {
    /// 30 users, unit test scale
    Micro,
    /// 150 users
    Small,
    /// 600 users; all-pairs growth is ~180K pairs per round
    Medium,
}

impl FixtureSize {
    pub fn user_count(&self) -> u64 {
        match self {
            Self::Micro => 30,
            Self::Small => 150,
            Self::Medium => 600,
        }
    }

    /// Friendships each new user makes on arrival.
    pub fn friends_per_user(&self) -> usize {
        match self {
            Self::Micro => 2,
            Self::Small => 3,
            Self::Medium => 4,
        }
    }
}

/// Two consecutive snapshots plus engagement for a handful of items.
pub struct SocialFixture {
    pub current: GraphSnapshot,
    pub previous: GraphSnapshot,
    pub items: Vec<ItemId>,
    pub engagement: Vec<EngagementRecord>,
}

/// Share of current friendships that did not exist in the previous snapshot.
const NEW_EDGE_SHARE: f64 = 0.1;
const ITEM_COUNT: u64 = 4;
/// Share of users with a play-count row for a given item.
const LISTENER_SHARE: f64 = 0.3;

/// Generate a fixture: users arrive in id order and befriend earlier users,
/// preferring those with many friends, so the degree distribution is skewed
/// like a real social graph. The previous snapshot drops a random tenth of
/// the friendships, which gives histogram calibration something to learn.
pub fn generate_fixture(size: FixtureSize, seed: u64) -> SocialFixture {
    let mut rng = StdRng::seed_from_u64(seed);
    let users = size.user_count();
    let per_user = size.friends_per_user();

    // Endpoint list doubles as a degree-weighted sampling pool.
    let mut pool: Vec<UserId> = Vec::new();
    let mut edges: Vec<(UserId, UserId)> = Vec::new();
    for user in 1..users {
        for _ in 0..per_user.min(user as usize) {
            let friend = if pool.is_empty() || rng.gen_bool(0.3) {
                rng.gen_range(0..user)
            } else {
                pool[rng.gen_range(0..pool.len())]
            };
            edges.push((friend, user));
            pool.push(friend);
            pool.push(user);
        }
    }

    let mut current = GraphSnapshot::new();
    let mut previous = GraphSnapshot::new();
    for user in 0..users {
        current.add_node(user);
        previous.add_node(user);
    }
    for &(u, v) in &edges {
        // Endpoints always differ: friends are drawn from earlier users.
        let _ = current.add_edge(u, v);
        if !rng.gen_bool(NEW_EDGE_SHARE) {
            let _ = previous.add_edge(u, v);
        }
    }

    let items: Vec<ItemId> = (1..=ITEM_COUNT).collect();
    let mut engagement = Vec::new();
    for &item_id in &items {
        for user_id in 0..users {
            if rng.gen_bool(LISTENER_SHARE) {
                engagement.push(EngagementRecord {
                    user_id,
                    item_id,
                    play_count: rng.gen_range(1..3000),
                });
            }
        }
    }

    SocialFixture {
        current,
        previous,
        items,
        engagement,
    }
}
