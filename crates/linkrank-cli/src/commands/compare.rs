//! Compare both estimators on the same graph

use crate::app::{CompareArgs, OutputFormat};
use crate::output;
use anyhow::Result;
use linkrank_core::{compare, speedup, Comparison, Config, RankEntry};
use serde::Serialize;

#[derive(Serialize)]
struct CompareReport<'a> {
    nodes: usize,
    edges: usize,
    dead_end: &'static str,
    edge_policy: &'static str,
    stochastic: StochasticReport<'a>,
    distribution: DistributionReport<'a>,
    speedup: Option<f64>,
    comparison: &'a Comparison,
}

#[derive(Serialize)]
struct StochasticReport<'a> {
    walks: u64,
    steps: usize,
    seed: u64,
    seconds: f64,
    top: &'a [RankEntry<'a>],
}

#[derive(Serialize)]
struct DistributionReport<'a> {
    iterations: usize,
    seconds: f64,
    top: &'a [RankEntry<'a>],
}

pub async fn run(args: CompareArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let config = super::apply_run_args(config, &args.run);
    let graph = super::load_graph(&args.graph, &config)?;
    let mut diameter = super::lazy_diameter(&graph);
    let stochastic = super::stochastic_estimator(&args.walk, &config, &graph, &mut diameter);
    let distribution = super::distribution_estimator(&args.distribution, &config, &mut diameter);

    let walks = super::estimate(stochastic, graph.clone(), "Random walks").await?;
    let probs = super::estimate(distribution, graph.clone(), "Distribution").await?;

    let comparison = compare(&walks.value, &probs.value, config.top)?;
    let ratio = speedup(walks.elapsed, probs.elapsed);
    let walks_top = walks.value.top(config.top);
    let probs_top = probs.value.top(config.top);

    match format {
        OutputFormat::Json => {
            let report = CompareReport {
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                dead_end: config.dead_end.as_str(),
                edge_policy: graph.edge_policy().as_str(),
                stochastic: StochasticReport {
                    walks: stochastic.walks,
                    steps: stochastic.steps,
                    seed: stochastic.seed,
                    seconds: walks.seconds(),
                    top: &walks_top,
                },
                distribution: DistributionReport {
                    iterations: distribution.iterations,
                    seconds: probs.seconds(),
                    top: &probs_top,
                },
                speedup: ratio,
                comparison: &comparison,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Plain | OutputFormat::Csv => {
            let sections: [(&str, &[RankEntry<'_>]); 2] =
                [("stochastic", &walks_top), ("distribution", &probs_top)];
            print!("{}", output::format_methods(&sections, format)?);
        }
        OutputFormat::Cli => {
            println!(
                "Estimate PageRank through random walks ({} walks, {} steps):",
                stochastic.walks, stochastic.steps
            );
            print!("{}", output::format_ranking(&walks_top, format)?);
            println!("Calculation took {:.2} seconds.", walks.seconds());
            println!();

            println!(
                "Estimate PageRank through probability distributions ({} iterations):",
                distribution.iterations
            );
            print!("{}", output::format_ranking(&probs_top, format)?);
            println!("Calculation took {:.2} seconds.", probs.seconds());
            println!();

            match ratio {
                Some(ratio) => println!("The probabilistic method was {:.0} times faster.", ratio),
                None => println!("The probabilistic method finished too quickly to time."),
            }
            println!(
                "L1 distance: {:.4}, max difference: {:.4}{}",
                comparison.l1_distance,
                comparison.max_abs_diff,
                comparison
                    .max_diff_node
                    .as_deref()
                    .map(|n| format!(" ({n})"))
                    .unwrap_or_default()
            );
            println!(
                "Top-{} overlap: {:.0}%, same leader: {}",
                comparison.top_k,
                comparison.top_k_overlap * 100.0,
                if comparison.same_leader { "yes" } else { "no" }
            );
        }
    }
    Ok(())
}
