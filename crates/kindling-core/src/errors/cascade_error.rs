//! Cascade simulation errors.

use super::error_code::{self, KindlingErrorCode};
use super::{GraphError, GrowthError};

/// Errors that can occur while simulating adoption spread.
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("growth between rounds failed: {0}")]
    Growth(#[from] GrowthError),

    #[error("cascade cancelled after {completed_rounds} rounds")]
    Cancelled { completed_rounds: usize },
}

impl KindlingErrorCode for CascadeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Growth(e) => e.error_code(),
            Self::Cancelled { .. } => error_code::CANCELLED,
        }
    }
}
