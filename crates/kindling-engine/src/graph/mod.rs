//! The friendship graph: an undirected `petgraph` graph indexed by user id,
//! carrying per-node live and scratch adoption state.

pub mod builder;
pub mod engagement;
pub mod scratch;
pub mod snapshot;

pub use engagement::EngagementRecord;
pub use scratch::ScratchGuard;
pub use snapshot::{FriendshipGraph, GraphSnapshot, UserNode};
