//! PageRank estimation by propagating the probability distribution
//!
//! Starts from the uniform distribution and, once per iteration, moves every
//! node's probability in equal shares along its out-edges. There is no
//! convergence test; callers pick the iteration count, typically a small
//! multiple of the graph diameter.

use super::{ensure_non_empty, DeadEndPolicy, Estimator, Observer, Ranking};
use crate::error::{LinkRankError, Result};
use crate::graph::Graph;
use rayon::prelude::*;

/// Graphs smaller than this are propagated on the calling thread
const PARALLEL_MIN_NODES: usize = 4096;

/// Distribution-propagation PageRank estimator
#[derive(Debug, Clone, Copy)]
pub struct DistributionEstimator {
    pub iterations: usize,
    pub dead_end: DeadEndPolicy,
    pub parallel: bool,
}

impl DistributionEstimator {
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            dead_end: DeadEndPolicy::default(),
            parallel: true,
        }
    }

    pub fn with_dead_end(mut self, policy: DeadEndPolicy) -> Self {
        self.dead_end = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Uniform starting distribution
    pub fn initial(graph: &Graph) -> Vec<f64> {
        let n = graph.node_count();
        vec![1.0 / n as f64; n]
    }

    /// Add the outgoing share of node `u` to `next`
    #[inline]
    fn scatter(&self, graph: &Graph, current: &[f64], u: usize, next: &mut [f64]) {
        let successors = graph.successors(u);
        if successors.is_empty() {
            if self.dead_end == DeadEndPolicy::Stay {
                next[u] += current[u];
            }
            return;
        }
        let share = current[u] / successors.len() as f64;
        for &v in successors {
            next[v] += share;
        }
    }

    /// One propagation step: the distribution after following one link
    pub fn step(&self, graph: &Graph, current: &[f64]) -> Vec<f64> {
        let n = graph.node_count();

        let mut next = if self.parallel && n >= PARALLEL_MIN_NODES {
            (0..n)
                .into_par_iter()
                .with_min_len(PARALLEL_MIN_NODES / 4)
                .fold(
                    || vec![0.0; n],
                    |mut partial, u| {
                        self.scatter(graph, current, u, &mut partial);
                        partial
                    },
                )
                .reduce(
                    || vec![0.0; n],
                    |mut acc, partial| {
                        acc.iter_mut().zip(partial).for_each(|(a, p)| *a += p);
                        acc
                    },
                )
        } else {
            let mut next = vec![0.0; n];
            for u in 0..n {
                self.scatter(graph, current, u, &mut next);
            }
            next
        };

        if self.dead_end == DeadEndPolicy::Teleport {
            let dangling: f64 = graph.dead_ends().map(|u| current[u]).sum();
            if dangling > 0.0 {
                let share = dangling / n as f64;
                next.iter_mut().for_each(|p| *p += share);
            }
        }

        next
    }
}

impl Estimator for DistributionEstimator {
    fn name(&self) -> &'static str {
        "distribution"
    }

    fn estimate(&self, graph: &Graph, observer: &Observer<'_>) -> Result<Ranking> {
        if self.iterations == 0 {
            return Err(LinkRankError::invalid("number of iterations must be positive"));
        }
        ensure_non_empty(graph)?;
        tracing::debug!(
            iterations = self.iterations,
            dead_end = self.dead_end.as_str(),
            "Starting distribution propagation"
        );

        observer.start(self.iterations as u64);
        let mut current = Self::initial(graph);
        for _ in 0..self.iterations {
            observer.check()?;
            current = self.step(graph, &current);
            observer.tick();
        }
        observer.finish();

        tracing::info!(
            "Completed {} distribution iterations over {} nodes",
            self.iterations,
            graph.node_count()
        );
        Ok(Ranking::from_graph(graph, current))
    }
}
