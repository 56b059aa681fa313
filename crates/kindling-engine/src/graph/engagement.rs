//! Historical engagement attached to nodes for one promoted item.

use kindling_core::errors::GraphError;
use kindling_core::types::collections::FxHashMap;
use kindling_core::types::ItemId;
use kindling_core::UserId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::GraphSnapshot;

/// One row of the engagement table: how often a user played an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementRecord {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub play_count: i64,
}

impl GraphSnapshot {
    /// Overwrite every node's engagement with its play count for `item_id`.
    ///
    /// Users without a row get 0. When a user has several rows for the item
    /// the first one wins. Rows are validated before anything is written, so
    /// a negative count leaves the graph unchanged. Returns how many nodes
    /// received a non-default value.
    pub fn attach_engagement(
        &mut self,
        item_id: ItemId,
        table: &[EngagementRecord],
    ) -> Result<usize, GraphError> {
        let mut per_user: FxHashMap<UserId, u64> = FxHashMap::default();
        for record in table.iter().filter(|r| r.item_id == item_id) {
            if record.play_count < 0 {
                return Err(GraphError::NegativeEngagement {
                    user_id: record.user_id,
                    item_id,
                    play_count: record.play_count,
                });
            }
            per_user
                .entry(record.user_id)
                .or_insert(record.play_count as u64);
        }

        let mut matched = 0;
        for node in self.graph.node_weights_mut() {
            node.engagement = match per_user.get(&node.user_id) {
                Some(&plays) => {
                    matched += 1;
                    plays
                }
                None => 0,
            };
        }
        debug!(item_id, matched, rows = per_user.len(), "engagement attached");
        Ok(matched)
    }
}
