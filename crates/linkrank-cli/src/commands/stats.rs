//! Stats command

use crate::app::{GraphArgs, OutputFormat};
use crate::output;
use anyhow::Result;
use linkrank_core::Config;

pub async fn run(args: GraphArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let graph = super::load_graph(&args, config)?;
    let stats = linkrank_core::stats(&graph);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Csv => {
            print!("{}", output::csv::format_stats(&stats)?);
        }
        _ => {
            println!("Nodes:              {}", stats.nodes);
            println!("Edges:              {}", stats.edges);
            println!("Dead ends:          {}", stats.dead_ends);
            println!("Diameter:           {}", stats.diameter);
            println!("Strongly connected: {}", stats.strongly_connected);
        }
    }
    Ok(())
}
