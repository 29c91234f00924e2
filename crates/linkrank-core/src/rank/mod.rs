//! PageRank estimation
//!
//! Two estimators share the same graph and the same [`DeadEndPolicy`] so
//! their results are directly comparable:
//!
//! - [`StochasticEstimator`] simulates random walkers and counts where they
//!   land after a fixed number of steps.
//! - [`DistributionEstimator`] pushes the full probability vector through
//!   the link structure for a fixed number of iterations.

mod compare;
mod distribution;
mod observer;
mod ranking;
mod stochastic;

pub use compare::{compare, speedup, timed, Comparison, Timed};
pub use distribution::DistributionEstimator;
pub use observer::{CancelToken, NoProgress, Observer, ProgressSink};
pub use ranking::{RankEntry, Ranking};
pub use stochastic::StochasticEstimator;

use crate::error::{LinkRankError, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What happens at a node with no outgoing edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeadEndPolicy {
    /// Jump to a uniformly random node; distribution mass is spread evenly
    #[default]
    Teleport,
    /// Stay put; distribution mass remains on the dead end
    Stay,
}

impl DeadEndPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeadEndPolicy::Teleport => "teleport",
            DeadEndPolicy::Stay => "stay",
        }
    }
}

impl FromStr for DeadEndPolicy {
    type Err = LinkRankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "teleport" => Ok(DeadEndPolicy::Teleport),
            "stay" => Ok(DeadEndPolicy::Stay),
            other => Err(LinkRankError::invalid(format!(
                "unknown dead-end policy {other:?} (expected teleport or stay)"
            ))),
        }
    }
}

/// A PageRank estimation strategy
pub trait Estimator: Send + Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Estimate a rank for every node of `graph`
    fn estimate(&self, graph: &Graph, observer: &Observer<'_>) -> Result<Ranking>;
}

pub(crate) fn ensure_non_empty(graph: &Graph) -> Result<()> {
    if graph.is_empty() {
        Err(LinkRankError::EmptyGraph)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_end_policy_from_str() {
        assert_eq!("teleport".parse::<DeadEndPolicy>().unwrap(), DeadEndPolicy::Teleport);
        assert_eq!(" Stay ".parse::<DeadEndPolicy>().unwrap(), DeadEndPolicy::Stay);
        assert!("bounce".parse::<DeadEndPolicy>().is_err());
    }

    #[test]
    fn test_estimators_share_trait() {
        let graph: Graph = "A B\nB A\n".parse().unwrap();
        let estimators: Vec<Box<dyn Estimator>> = vec![
            Box::new(StochasticEstimator::new(100, 3)),
            Box::new(DistributionEstimator::new(3)),
        ];
        for estimator in &estimators {
            let ranking = estimator.estimate(&graph, &Observer::silent()).unwrap();
            assert_eq!(ranking.len(), 2, "{}", estimator.name());
        }
    }
}
