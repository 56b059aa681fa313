//! Error handling for Kindling.
//! One error enum per subsystem, `thiserror` only.
//!
//! Divisions whose denominator is zero (isolated nodes, empty neighbour
//! unions) never produce an error value: they resolve to `0.0` inside the
//! component that computes them.

pub mod cascade_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;
pub mod growth_error;
pub mod selection_error;

pub use cascade_error::CascadeError;
pub use config_error::ConfigError;
pub use error_code::KindlingErrorCode;
pub use graph_error::GraphError;
pub use growth_error::GrowthError;
pub use selection_error::SelectionError;

/// Top-level error aggregating every subsystem.
#[derive(Debug, thiserror::Error)]
pub enum KindlingError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Growth error: {0}")]
    Growth(#[from] GrowthError),

    #[error("Cascade error: {0}")]
    Cascade(#[from] CascadeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl KindlingErrorCode for KindlingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Selection(e) => e.error_code(),
            Self::Growth(e) => e.error_code(),
            Self::Cascade(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Convenience alias used by the engine facade.
pub type KindlingResult<T> = Result<T, KindlingError>;
