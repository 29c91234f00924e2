//! Linkrank Core Library
//!
//! PageRank estimation for directed link graphs.
//!
//! # Features
//! - Edge-list ingestion into an indexed (CSR) graph
//! - Random-walk estimation with seeded, thread-count independent sampling
//! - Probability-distribution propagation with rayon reductions
//! - Explicit dead-end and parallel-edge policies shared by both estimators
//! - Ranking comparison, graph diameter and statistics
//!
//! ```
//! use linkrank_core::{DistributionEstimator, Estimator, Graph, Observer};
//!
//! let graph: Graph = "A B\nB C\nC A\n".parse().unwrap();
//! let ranking = DistributionEstimator::new(4)
//!     .estimate(&graph, &Observer::silent())
//!     .unwrap();
//! assert!((ranking.get("A").unwrap() - 1.0 / 3.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::{Config, DistributionConfig, WalkConfig};
pub use error::{Error, LinkRankError, Result};
pub use graph::{
    diameter, load_edge_list, parse_edge_list, stats, EdgePolicy, Graph, GraphBuilder, GraphStats,
};
pub use rank::{
    compare, speedup, timed, CancelToken, Comparison, DeadEndPolicy, DistributionEstimator,
    Estimator, NoProgress, Observer, ProgressSink, RankEntry, Ranking, StochasticEstimator, Timed,
};

/// Seed used when none is configured
pub const DEFAULT_SEED: u64 = 42;

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
