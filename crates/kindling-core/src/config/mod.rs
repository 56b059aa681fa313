//! Configuration system for Kindling.
//! TOML-based, 4-layer resolution: overrides > env > project file > defaults.

pub mod cascade_config;
pub mod defaults;
pub mod growth_config;
pub mod influence_config;
pub mod kindling_config;
pub mod telemetry_config;

pub use cascade_config::CascadeConfig;
pub use growth_config::{GrowthConfig, GrowthModelKind, OutOfDomainPolicy, PairEnumeration};
pub use influence_config::InfluenceConfig;
pub use kindling_config::{ConfigOverrides, KindlingConfig};
pub use telemetry_config::TelemetryConfig;
