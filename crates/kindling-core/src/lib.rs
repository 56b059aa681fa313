//! # kindling-core
//!
//! Foundation crate for the Kindling adoption simulator.
//! Errors, configuration, cancellation, tracing setup, and shared aliases.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;
pub mod traits;
pub mod types;

pub use config::KindlingConfig;
pub use errors::{KindlingError, KindlingResult};
pub use traits::{Cancellable, CancellationToken};
pub use types::UserId;
