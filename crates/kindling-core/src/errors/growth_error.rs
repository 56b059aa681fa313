//! Growth calibration and edge-formation errors.

use super::error_code::{self, KindlingErrorCode};
use super::GraphError;

/// Errors that can occur while calibrating or applying graph growth.
///
/// `DegenerateDistribution` and `OutOfDomain` are recoverable signals:
/// callers pick the fallback.
#[derive(Debug, thiserror::Error)]
pub enum GrowthError {
    #[error(
        "no new edges between snapshots ({previous_nodes} nodes, {previous_edges} edges before)"
    )]
    DegenerateDistribution {
        previous_nodes: usize,
        previous_edges: usize,
    },

    #[error("{common_neighbors} common neighbours exceeds calibrated range 0..={max_bucket}")]
    OutOfDomain {
        common_neighbors: usize,
        max_bucket: usize,
    },

    #[error("edge probability {value} is outside [0, 1]")]
    InvalidProbability { value: f64 },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl KindlingErrorCode for GrowthError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DegenerateDistribution { .. } => error_code::DEGENERATE_DISTRIBUTION,
            Self::OutOfDomain { .. } => error_code::OUT_OF_DOMAIN,
            Self::InvalidProbability { .. } => error_code::INVALID_ARGUMENT,
            Self::Graph(e) => e.error_code(),
        }
    }
}
