//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkrank_core::DeadEndPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Estimate the PageRank of pages in a link graph"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "LINKRANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show node, edge, dead-end and diameter statistics
    Stats(GraphArgs),

    /// Estimate PageRank through random walks
    Walk(WalkArgs),

    /// Estimate PageRank through probability distributions
    Distribution(DistributionArgs),

    /// Run both estimators and compare them
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct GraphArgs {
    /// Edge list file, one `source target` pair per line
    pub file: PathBuf,

    /// Count repeated links separately instead of merging them
    #[arg(long)]
    pub multigraph: bool,
}

#[derive(Args)]
pub struct RunArgs {
    /// What walkers and probability mass do at pages without links
    #[arg(long, value_enum)]
    pub dead_end: Option<DeadEndArg>,

    /// Run on a single thread
    #[arg(long)]
    pub serial: bool,

    /// Number of top pages to show
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct WalkParams {
    /// Number of random walks (default: nodes squared)
    #[arg(long)]
    pub walks: Option<u64>,

    /// Links followed per walk (default: twice the diameter)
    #[arg(long)]
    pub steps: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct DistributionParams {
    /// Propagation iterations (default: twice the diameter)
    #[arg(long)]
    pub iterations: Option<usize>,
}

#[derive(Args)]
pub struct WalkArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(flatten)]
    pub walk: WalkParams,

    #[command(flatten)]
    pub run: RunArgs,

    /// Write the full ranking to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct DistributionArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(flatten)]
    pub distribution: DistributionParams,

    #[command(flatten)]
    pub run: RunArgs,

    /// Write the full ranking to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(flatten)]
    pub walk: WalkParams,

    #[command(flatten)]
    pub distribution: DistributionParams,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DeadEndArg {
    Teleport,
    Stay,
}

impl From<DeadEndArg> for DeadEndPolicy {
    fn from(arg: DeadEndArg) -> Self {
        match arg {
            DeadEndArg::Teleport => DeadEndPolicy::Teleport,
            DeadEndArg::Stay => DeadEndPolicy::Stay,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Plain,
    Json,
    Csv,
}
