//! Link graph model, edge-list parsing and statistics

mod model;
mod parse;
mod stats;

pub use model::{EdgePolicy, Graph, GraphBuilder};
pub use parse::{load_edge_list, parse_edge_list};
pub use stats::{diameter, stats, GraphStats};
