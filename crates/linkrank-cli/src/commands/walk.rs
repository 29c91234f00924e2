//! Random-walk estimation command

use crate::app::{OutputFormat, WalkArgs};
use crate::output;
use anyhow::Result;
use linkrank_core::Config;

pub async fn run(args: WalkArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let config = super::apply_run_args(config, &args.run);
    let graph = super::load_graph(&args.graph, &config)?;
    let mut diameter = super::lazy_diameter(&graph);
    let estimator = super::stochastic_estimator(&args.walk, &config, &graph, &mut diameter);

    if format == OutputFormat::Cli {
        println!("Estimate PageRank through random walks:");
    }
    let result = super::estimate(estimator, graph.clone(), "Random walks").await?;

    if let Some(path) = &args.output {
        output::write_ranking_file(path, &result.value.sorted())?;
    }
    print!(
        "{}",
        output::format_ranking(&result.value.top(config.top), format)?
    );
    if format == OutputFormat::Cli {
        println!("Calculation took {:.2} seconds.", result.seconds());
    }
    Ok(())
}
