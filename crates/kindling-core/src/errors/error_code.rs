//! Stable error codes shared by every subsystem error.

pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const DEGENERATE_DISTRIBUTION: &str = "DEGENERATE_DISTRIBUTION";
pub const OUT_OF_DOMAIN: &str = "OUT_OF_DOMAIN";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CANCELLED: &str = "CANCELLED";

/// Maps an error onto its stable, machine-readable code.
pub trait KindlingErrorCode {
    fn error_code(&self) -> &'static str;
}
