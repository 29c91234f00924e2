//! Edge-list parsing

use super::model::{EdgePolicy, Graph, GraphBuilder};
use crate::error::{LinkRankError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Split a line into `(source, target)`; `None` unless exactly two tokens
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(source), Some(target), None) => Some((source, target)),
        _ => None,
    }
}

/// Parse a whitespace-separated edge list.
///
/// Blank lines are skipped. Any other line that does not hold exactly two
/// tokens aborts the whole parse.
pub fn parse_edge_list<R: BufRead>(reader: R, policy: EdgePolicy) -> Result<Graph> {
    let mut builder = GraphBuilder::new(policy);

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (source, target) = parse_line(&line).ok_or_else(|| LinkRankError::MalformedInput {
            line: i + 1,
            content: line.clone(),
        })?;
        builder.add_edge(source, target);
    }

    Ok(builder.build())
}

/// Load an edge list from a file
pub fn load_edge_list(path: impl AsRef<Path>, policy: EdgePolicy) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = parse_edge_list(BufReader::new(file), policy)?;

    tracing::info!(
        "Loaded graph from {} with {} nodes and {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

impl FromStr for Graph {
    type Err = LinkRankError;

    fn from_str(s: &str) -> Result<Self> {
        parse_edge_list(s.as_bytes(), EdgePolicy::default())
    }
}
