//! Seed selection errors.

use super::error_code::{self, KindlingErrorCode};
use super::GraphError;

/// Errors that can occur during greedy seed selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("cannot select {requested} seeds from a graph of {node_count} nodes")]
    InvalidSeedCount { requested: usize, node_count: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("seed selection cancelled")]
    Cancelled,
}

impl KindlingErrorCode for SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSeedCount { .. } => error_code::INVALID_ARGUMENT,
            Self::Graph(e) => e.error_code(),
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}
