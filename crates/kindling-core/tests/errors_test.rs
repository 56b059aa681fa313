use kindling_core::errors::{
    CascadeError, ConfigError, GraphError, GrowthError, KindlingError, KindlingErrorCode,
    SelectionError,
};

#[test]
fn invalid_argument_family_shares_one_code() {
    let errors: Vec<KindlingError> = vec![
        GraphError::SelfLoop { node: 3 }.into(),
        SelectionError::InvalidSeedCount {
            requested: 0,
            node_count: 4,
        }
        .into(),
        GrowthError::InvalidProbability { value: 1.2 }.into(),
    ];
    for e in &errors {
        assert_eq!(e.error_code(), "INVALID_ARGUMENT", "{e}");
    }
}

#[test]
fn recoverable_growth_signals_have_distinct_codes() {
    let degenerate = GrowthError::DegenerateDistribution {
        previous_nodes: 4,
        previous_edges: 3,
    };
    let out_of_domain = GrowthError::OutOfDomain {
        common_neighbors: 9,
        max_bucket: 2,
    };
    assert_eq!(degenerate.error_code(), "DEGENERATE_DISTRIBUTION");
    assert_eq!(out_of_domain.error_code(), "OUT_OF_DOMAIN");
    assert!(out_of_domain.to_string().contains("0..=2"));
}

#[test]
fn wrapped_errors_keep_their_inner_code() {
    let cascade: CascadeError = GrowthError::OutOfDomain {
        common_neighbors: 5,
        max_bucket: 1,
    }
    .into();
    assert_eq!(cascade.error_code(), "OUT_OF_DOMAIN");

    let cancelled = KindlingError::from(CascadeError::Cancelled { completed_rounds: 2 });
    assert_eq!(cancelled.error_code(), "CANCELLED");

    let config = KindlingError::from(ConfigError::FileNotFound {
        path: "kindling.toml".to_string(),
    });
    assert_eq!(config.error_code(), "CONFIG_ERROR");
}
