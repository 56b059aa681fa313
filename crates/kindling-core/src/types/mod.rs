//! Shared type aliases.

pub mod collections;

/// Identifier of a user (a node in the friendship graph).
pub type UserId = u64;

/// Identifier of a promoted item.
pub type ItemId = u64;
