//! Graph construction and lookup errors.

use crate::types::{ItemId, UserId};

use super::error_code::{self, KindlingErrorCode};

/// Errors raised while building or querying a graph snapshot.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("self-loop on node {node} is not a valid friendship")]
    SelfLoop { node: UserId },

    #[error("node {node} is not part of the graph")]
    UnknownNode { node: UserId },

    #[error("negative engagement {play_count} for user {user_id} on item {item_id}")]
    NegativeEngagement {
        user_id: UserId,
        item_id: ItemId,
        play_count: i64,
    },
}

impl KindlingErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_ARGUMENT
    }
}
