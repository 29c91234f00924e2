//! Linkrank CLI
//!
//! Estimate which pages of a link graph matter most.

use anyhow::Result;
use clap::Parser;
use linkrank_core::error::exit_codes;
use linkrank_core::{Config, LinkRankError};

mod app;
mod commands;
mod output;
mod progress;

use app::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        let code = e
            .downcast_ref::<LinkRankError>()
            .map(LinkRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Stats(args) => commands::stats::run(args, &config, cli.format).await,
        Commands::Walk(args) => commands::walk::run(args, &config, cli.format).await,
        Commands::Distribution(args) => {
            commands::distribution::run(args, &config, cli.format).await
        }
        Commands::Compare(args) => commands::compare::run(args, &config, cli.format).await,
    }
}
