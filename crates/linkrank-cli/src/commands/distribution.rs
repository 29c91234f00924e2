//! Distribution-propagation estimation command

use crate::app::{DistributionArgs, OutputFormat};
use crate::output;
use anyhow::Result;
use linkrank_core::Config;

pub async fn run(args: DistributionArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let config = super::apply_run_args(config, &args.run);
    let graph = super::load_graph(&args.graph, &config)?;
    let mut diameter = super::lazy_diameter(&graph);
    let estimator = super::distribution_estimator(&args.distribution, &config, &mut diameter);

    if format == OutputFormat::Cli {
        println!("Estimate PageRank through probability distributions:");
    }
    let result = super::estimate(estimator, graph.clone(), "Distribution").await?;

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
