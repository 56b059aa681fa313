//! Tests for kindling-bench fixtures.

use kindling_bench::fixtures::{generate_fixture, FixtureSize};
use kindling_engine::HistogramCalibrator;

#[test]
fn fixture_micro_has_every_user() {
    let fixture = generate_fixture(FixtureSize::Micro, 42);
    assert_eq!(fixture.current.node_count(), 30);
    assert_eq!(fixture.previous.node_count(), 30);
    assert!(fixture.current.edge_count() > 0);
    assert!(fixture.previous.edge_count() <= fixture.current.edge_count());
}

#[test]
fn previous_snapshot_is_a_subgraph() {
    let fixture = generate_fixture(FixtureSize::Small, 3);
    for (u, v) in fixture.previous.edges() {
        assert!(fixture.current.has_edge(u, v));
    }
}

#[test]
fn fixture_deterministic_same_seed() {
    let a = generate_fixture(FixtureSize::Micro, 42);
    let b = generate_fixture(FixtureSize::Micro, 42);
    assert_eq!(a.current.edges(), b.current.edges());
    assert_eq!(a.previous.edges(), b.previous.edges());
    assert_eq!(a.engagement, b.engagement);
}

#[test]
fn fixture_different_seeds_differ() {
    let a = generate_fixture(FixtureSize::Small, 42);
    let b = generate_fixture(FixtureSize::Small, 99);
    assert_ne!(a.current.edges(), b.current.edges());
}

#[test]
fn small_fixture_calibrates() {
    let fixture = generate_fixture(FixtureSize::Small, 42);
    let histogram = HistogramCalibrator::build(&fixture.current, &fixture.previous).unwrap();
    assert!(histogram.new_edge_count() > 0);
    let total: f64 = histogram.buckets().iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn engagement_rows_are_non_negative() {
    let fixture = generate_fixture(FixtureSize::Micro, 5);
    assert!(fixture.engagement.iter().all(|r| r.play_count > 0));
    assert!(fixture
        .engagement
        .iter()
        .all(|r| fixture.items.contains(&r.item_id)));
}
