//! End-to-end scenarios over small hand-built graphs

use linkrank_core::{
    compare, load_edge_list, stats, DeadEndPolicy, DistributionEstimator, EdgePolicy, Estimator,
    Graph, LinkRankError, Observer, StochasticEstimator,
};
use std::io::Write;
use tempfile::NamedTempFile;

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_three_cycle_is_uniform() {
    let graph: Graph = "A B\nB C\nC A\n".parse().unwrap();
    let ranking = DistributionEstimator::new(1)
        .estimate(&graph, &Observer::silent())
        .unwrap();

    for node in ["A", "B", "C"] {
        assert!((ranking.get(node).unwrap() - 1.0 / 3.0).abs() < TOLERANCE);
    }
}

#[test]
fn test_hub_ranked_first_by_both_estimators() {
    let graph: Graph = "A B\nA C\nB A\nC A\n".parse().unwrap();

    let walk = StochasticEstimator::new(10_000, 3)
        .estimate(&graph, &Observer::silent())
        .unwrap();
    let dist = DistributionEstimator::new(3)
        .estimate(&graph, &Observer::silent())
        .unwrap();

    assert_eq!(walk.top(1)[0].node, "A");
    assert_eq!(dist.top(1)[0].node, "A");

    let comparison = compare(&walk, &dist, 1).unwrap();
    assert!(comparison.same_leader);
    assert!(comparison.l1_distance < 0.05, "{comparison:?}");
}

#[test]
fn test_estimators_agree_on_aperiodic_graph() {
    let graph: Graph = "A B\nB C\nC A\nC B\nB D\nD A\n".parse().unwrap();
    let stats = stats(&graph);
    assert!(stats.strongly_connected);

    let iterations = 40;
    let walk = StochasticEstimator::new(40_000, iterations)
        .estimate(&graph, &Observer::silent())
        .unwrap();
    let dist = DistributionEstimator::new(iterations)
        .estimate(&graph, &Observer::silent())
        .unwrap();

    let comparison = compare(&walk, &dist, 2).unwrap();
    assert!(comparison.max_abs_diff < 0.02, "{comparison:?}");
    assert_eq!(comparison.top_k_overlap, 1.0);
}

#[test]
fn test_dead_end_policies_conserve_mass() {
    let graph: Graph = "A B\nB A\nA D\n".parse().unwrap();

    for policy in [DeadEndPolicy::Teleport, DeadEndPolicy::Stay] {
        let walk = StochasticEstimator::new(5_000, 8)
            .with_dead_end(policy)
            .estimate(&graph, &Observer::silent())
            .unwrap();
        let dist = DistributionEstimator::new(8)
            .with_dead_end(policy)
            .estimate(&graph, &Observer::silent())
            .unwrap();

        assert!((walk.total() - 1.0).abs() < TOLERANCE, "{policy:?}");
        assert!((dist.total() - 1.0).abs() < TOLERANCE, "{policy:?}");
        assert!(dist.get("D").unwrap() > 0.0);
    }
}

#[test]
fn test_malformed_file_returns_no_graph() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "A B").unwrap();
    writeln!(file, "onlyonetoken").unwrap();
    writeln!(file, "B C").unwrap();

    let err = load_edge_list(file.path(), EdgePolicy::default()).unwrap_err();
    assert!(matches!(err, LinkRankError::MalformedInput { line: 2, .. }));
}

#[test]
fn test_load_and_rank_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    for line in [
        "http://site/index http://site/about",
        "http://site/index http://site/news",
        "http://site/about http://site/index",
        "http://site/news http://site/index",
        "http://site/news http://site/index",
    ] {
        writeln!(file, "{line}").unwrap();
    }

    let dedup = load_edge_list(file.path(), EdgePolicy::Deduplicate).unwrap();
    let multi = load_edge_list(file.path(), EdgePolicy::Multigraph).unwrap();
    assert_eq!(dedup.edge_count(), 4);
    assert_eq!(multi.edge_count(), 5);

    let ranking = DistributionEstimator::new(5)
        .estimate(&dedup, &Observer::silent())
        .unwrap();
    assert_eq!(ranking.top(1)[0].node, "http://site/index");
}
