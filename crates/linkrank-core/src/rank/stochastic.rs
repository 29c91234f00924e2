//! PageRank estimation by random walks
//!
//! Every walk starts on a uniformly random node and follows uniformly random
//! out-edges for a fixed number of steps; the rank of a node is the fraction
//! of walks that end on it.
//!
//! ## Reproducibility
//!
//! Walks are split into blocks of [`WALK_BLOCK`] and block `b` draws from an
//! RNG seeded with `seed + b`. Landing counts are integers, so the result for
//! a given seed does not depend on thread count or scheduling.

use super::{ensure_non_empty, DeadEndPolicy, Estimator, Observer, Ranking};
use crate::error::{LinkRankError, Result};
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Walks simulated per RNG stream
const WALK_BLOCK: u64 = 1024;

/// Random-walk PageRank estimator
#[derive(Debug, Clone, Copy)]
pub struct StochasticEstimator {
    /// Number of independent walks
    pub walks: u64,
    /// Links followed per walk
    pub steps: usize,
    pub seed: u64,
    pub dead_end: DeadEndPolicy,
    /// Spread walk blocks over the rayon pool
    pub parallel: bool,
}

impl StochasticEstimator {
    pub fn new(walks: u64, steps: usize) -> Self {
        Self {
            walks,
            steps,
            seed: crate::DEFAULT_SEED,
            dead_end: DeadEndPolicy::default(),
            parallel: true,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_dead_end(mut self, policy: DeadEndPolicy) -> Self {
        self.dead_end = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn validate(&self, graph: &Graph) -> Result<()> {
        if self.walks == 0 {
            return Err(LinkRankError::invalid("number of walks must be positive"));
        }
        if self.steps == 0 {
            return Err(LinkRankError::invalid("number of steps must be positive"));
        }
        ensure_non_empty(graph)
    }

    /// Run one walk and return the landing node
    fn walk<R: Rng>(&self, graph: &Graph, rng: &mut R) -> usize {
        let n = graph.node_count();
        let mut current = rng.random_range(0..n);

        for _ in 0..self.steps {
            let successors = graph.successors(current);
            if successors.is_empty() {
                match self.dead_end {
                    DeadEndPolicy::Teleport => current = rng.random_range(0..n),
                    DeadEndPolicy::Stay => break,
                }
            } else {
                current = successors[rng.random_range(0..successors.len())];
            }
        }
        current
    }

    fn run_block(
        &self,
        graph: &Graph,
        block: u64,
        hits: &mut [u64],
        observer: &Observer<'_>,
    ) -> Result<()> {
        let start = block * WALK_BLOCK;
        let end = (start + WALK_BLOCK).min(self.walks);
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(block));

        for _ in start..end {
            observer.check()?;
            hits[self.walk(graph, &mut rng)] += 1;
            observer.tick();
        }
        Ok(())
    }

    fn count_hits(&self, graph: &Graph, observer: &Observer<'_>) -> Result<Vec<u64>> {
        let n = graph.node_count();
        let blocks = self.walks.div_ceil(WALK_BLOCK);

        if self.parallel {
            (0..blocks)
                .into_par_iter()
                .try_fold(
                    || vec![0u64; n],
                    |mut hits, block| {
                        self.run_block(graph, block, &mut hits, observer)
                            .map(|()| hits)
                    },
                )
                .try_reduce(
                    || vec![0u64; n],
                    |mut acc, hits| {
                        acc.iter_mut().zip(hits).for_each(|(a, h)| *a += h);
                        Ok(acc)
                    },
                )
        } else {
            let mut hits = vec![0u64; n];
            for block in 0..blocks {
                self.run_block(graph, block, &mut hits, observer)?;
            }
            Ok(hits)
        }
    }
}

impl Estimator for StochasticEstimator {
    fn name(&self) -> &'static str {
        "stochastic"
    }

    fn estimate(&self, graph: &Graph, observer: &Observer<'_>) -> Result<Ranking> {
        self.validate(graph)?;
        tracing::debug!(
            walks = self.walks,
            steps = self.steps,
            seed = self.seed,
            dead_end = self.dead_end.as_str(),
            "Starting random walks"
        );

        observer.start(self.walks);
        let hits = self.count_hits(graph, observer)?;
        observer.finish();

        let share = 1.0 / self.walks as f64;
        let weights = hits.into_iter().map(|h| h as f64 * share).collect();

        tracing::info!(
            "Completed {} random walks over {} nodes",
            self.walks,
            graph.node_count()
        );
        Ok(Ranking::from_graph(graph, weights))
    }
}
