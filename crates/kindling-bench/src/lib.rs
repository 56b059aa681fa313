//! # kindling-bench
//!
//! Benchmarks for the two cost centres of the simulator: greedy seed
//! selection (full rescan per pick) and pairwise graph growth.
//!
//! Contains deterministic social-graph fixtures shared by the benches.

pub mod fixtures;
