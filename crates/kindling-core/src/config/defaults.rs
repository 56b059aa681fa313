// Single source of truth for all default values.

// --- Influence ---
pub const DEFAULT_ENGAGEMENT_SCALE: f64 = 1000.0;
pub const DEFAULT_SEED_COUNT: usize = 5;

// --- Growth ---
pub const DEFAULT_UNIFORM_PROBABILITY: f64 = 0.01;
pub const DEFAULT_SELECTION_PREGROWTH_ROUNDS: usize = 7;

// --- Cascade ---
pub const DEFAULT_ROUNDS: usize = 6;
pub const DEFAULT_GROW_BETWEEN_ROUNDS: bool = true;

// --- Telemetry ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
