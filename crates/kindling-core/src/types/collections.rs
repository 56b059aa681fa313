//! Fast hash collections for integer keys.

pub use rustc_hash::{FxHashMap, FxHashSet};
