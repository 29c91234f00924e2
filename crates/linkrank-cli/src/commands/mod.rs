//! CLI command handlers

pub mod compare;
pub mod distribution;
pub mod stats;
pub mod walk;

use crate::app::{DistributionParams, GraphArgs, RunArgs, WalkParams};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use linkrank_core::{
    diameter, load_edge_list, timed, CancelToken, Config, DistributionEstimator, EdgePolicy,
    Estimator, Graph, Observer, Ranking, StochasticEstimator, Timed,
};
use std::sync::Arc;

/// Load the edge list named on the command line
pub(crate) fn load_graph(args: &GraphArgs, config: &Config) -> Result<Arc<Graph>> {
    let policy = if args.multigraph {
        EdgePolicy::Multigraph
    } else {
        config.edge_policy
    };
    let graph = load_edge_list(&args.file, policy)
        .with_context(|| format!("Failed to load graph from {}", args.file.display()))?;
    Ok(Arc::new(graph))
}

/// Layer command-line overrides on top of the loaded config
pub(crate) fn apply_run_args(config: &Config, run: &RunArgs) -> Config {
    let mut config = config.clone();
    if let Some(policy) = run.dead_end {
        config.dead_end = policy.into();
    }
    if run.serial {
        config.parallel = false;
    }
    if let Some(top) = run.top {
        config.top = top;
    }
    config
}

/// Diameter computed on first use; it costs a BFS from every node
pub(crate) fn lazy_diameter(graph: &Graph) -> impl FnMut() -> usize + '_ {
    let mut cached = None;
    move || {
        *cached.get_or_insert_with(|| {
            let d = diameter(graph);
            tracing::info!("Graph diameter is {}", d);
            d
        })
    }
}

pub(crate) fn stochastic_estimator(
    params: &WalkParams,
    config: &Config,
    graph: &Graph,
    diameter: &mut impl FnMut() -> usize,
) -> StochasticEstimator {
    let walks = params
        .walks
        .unwrap_or_else(|| config.walks_for(graph.node_count()));
    let steps = params
        .steps
        .unwrap_or_else(|| config.steps_for(diameter()));

    StochasticEstimator::new(walks, steps)
        .with_seed(params.seed.unwrap_or(config.walk.seed))
        .with_dead_end(config.dead_end)
        .with_parallel(config.parallel)
}

pub(crate) fn distribution_estimator(
    params: &DistributionParams,
    config: &Config,
    diameter: &mut impl FnMut() -> usize,
) -> DistributionEstimator {
    let iterations = params
        .iterations
        .unwrap_or_else(|| config.iterations_for(diameter()));

    DistributionEstimator::new(iterations)
        .with_dead_end(config.dead_end)
        .with_parallel(config.parallel)
}

/// Run an estimator off the async runtime; Ctrl-C cancels it
pub(crate) async fn estimate<E>(
    estimator: E,
    graph: Arc<Graph>,
    label: &str,
) -> Result<Timed<Ranking>>
where
    E: Estimator + 'static,
{
    let cancel = CancelToken::new();
    let progress = Arc::new(ProgressReporter::new(label));

    let mut task = {
        let cancel = cancel.clone();
        let progress = Arc::clone(&progress);
        tokio::task::spawn_blocking(move || {
            let observer = Observer::new(progress.as_ref(), cancel);
            timed(|| estimator.estimate(&graph, &observer))
        })
    };

    let run = tokio::select! {
        joined = &mut task => joined?,
        Ok(()) = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted, stopping {label}...");
            cancel.cancel();
            task.await?
        }
    };

    Ok(Timed {
        value: run.value?,
        elapsed: run.elapsed,
    })
}
