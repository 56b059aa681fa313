//! Tests for the Kindling configuration system.

use std::sync::Mutex;

use kindling_core::config::{
    ConfigOverrides, GrowthModelKind, KindlingConfig, OutOfDomainPolicy, PairEnumeration,
};
use kindling_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_kindling_env_vars() {
    for key in [
        "KINDLING_SEED_COUNT",
        "KINDLING_ENGAGEMENT_SCALE",
        "KINDLING_UNIFORM_PROBABILITY",
        "KINDLING_GROWTH_MODEL",
        "KINDLING_ROUNDS",
        "KINDLING_RNG_SEED",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_yields_defaults() {
    let config = KindlingConfig::from_toml("").unwrap();

    assert_eq!(config.influence.effective_engagement_scale(), 1000.0);
    assert_eq!(config.influence.effective_seed_count(), 5);
    assert_eq!(config.growth.effective_model(), GrowthModelKind::Uniform);
    assert_eq!(config.growth.effective_uniform_probability(), 0.01);
    assert_eq!(config.growth.effective_out_of_domain(), OutOfDomainPolicy::Zero);
    assert_eq!(
        config.growth.effective_pair_enumeration(),
        PairEnumeration::AllPairs
    );
    assert_eq!(config.growth.effective_selection_pregrowth_rounds(), 7);
    assert_eq!(config.cascade.effective_rounds(), 6);
    assert!(config.cascade.rng_seed.is_none());
    assert!(config.cascade.effective_grow_between_rounds());
    assert_eq!(config.telemetry.effective_log_level(), "info");
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let toml = r#"
[growth]
model = "friendly_index"
out_of_domain = "error"

[cascade]
rounds = 3
rng_seed = 42
"#;
    let config = KindlingConfig::from_toml(toml).unwrap();
    assert_eq!(config.growth.effective_model(), GrowthModelKind::FriendlyIndex);
    assert_eq!(config.growth.effective_out_of_domain(), OutOfDomainPolicy::Error);
    assert_eq!(config.cascade.effective_rounds(), 3);
    assert_eq!(config.cascade.rng_seed, Some(42));
    assert_eq!(config.influence.effective_seed_count(), 5);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = KindlingConfig::from_toml("[cascade\nrounds = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn unknown_model_name_is_a_parse_error() {
    let err = KindlingConfig::from_toml("[growth]\nmodel = \"preferential\"").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn layered_resolution_overrides_beat_env_beat_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_kindling_env_vars();

    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("kindling.toml"),
        r#"
[influence]
seed_count = 3

[cascade]
rounds = 10
rng_seed = 1
"#,
    )
    .unwrap();

    std::env::set_var("KINDLING_ROUNDS", "4");
    std::env::set_var("KINDLING_RNG_SEED", "not-a-number");

    let overrides = ConfigOverrides {
        seed_count: Some(2),
        ..Default::default()
    };
    let config = KindlingConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.influence.effective_seed_count(), 2, "override wins");
    assert_eq!(config.cascade.effective_rounds(), 4, "env beats file");
    assert_eq!(config.cascade.rng_seed, Some(1), "bad env value is ignored");

    clear_kindling_env_vars();
}

#[test]
fn missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_kindling_env_vars();

    let dir = tempfile::tempdir().unwrap();
    let config = KindlingConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.cascade.effective_rounds(), 6);
}

#[test]
fn validation_rejects_out_of_range_values() {
    let bad_probability = KindlingConfig::from_toml("[growth]\nuniform_probability = 1.5").unwrap();
    let err = KindlingConfig::validate(&bad_probability).unwrap_err();
    assert!(
        matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "growth.uniform_probability")
    );

    let zero_scale = KindlingConfig::from_toml("[influence]\nengagement_scale = 0.0").unwrap();
    assert!(KindlingConfig::validate(&zero_scale).is_err());

    let zero_seeds = KindlingConfig::from_toml("[influence]\nseed_count = 0").unwrap();
    assert!(KindlingConfig::validate(&zero_seeds).is_err());
}

#[test]
fn config_round_trips_through_toml() {
    let mut config = KindlingConfig::default();
    config.growth.model = Some(GrowthModelKind::CommonNeighborHistogram);
    config.cascade.rng_seed = Some(7);

    let text = config.to_toml().unwrap();
    let parsed = KindlingConfig::from_toml(&text).unwrap();
    assert_eq!(
        parsed.growth.effective_model(),
        GrowthModelKind::CommonNeighborHistogram
    );
    assert_eq!(parsed.cascade.rng_seed, Some(7));
}
