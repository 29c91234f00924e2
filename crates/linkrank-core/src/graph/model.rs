//! Indexed directed link graph

use crate::error::{LinkRankError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How repeated `source target` pairs are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// A repeated pair is stored once
    #[default]
    Deduplicate,
    /// Every occurrence is stored, so repeated pairs carry more transition weight
    Multigraph,
}

impl EdgePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgePolicy::Deduplicate => "deduplicate",
            EdgePolicy::Multigraph => "multigraph",
        }
    }
}

/// Directed graph over string node ids.
///
/// Nodes get a dense index in first-appearance order. Out-edges live in a
/// compressed adjacency list, so the successors of a node are a slice and a
/// uniformly random out-edge is a single index lookup.
#[derive(Debug, Clone)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, usize>,
    offsets: Vec<usize>,
    targets: Vec<usize>,
    policy: EdgePolicy,
}

impl Graph {
    /// Build a graph from `(source, target)` pairs
    pub fn from_edges<I, S>(edges: I, policy: EdgePolicy) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut builder = GraphBuilder::new(policy);
        for (source, target) in edges {
            builder.add_edge(source.as_ref(), target.as_ref());
        }
        builder.build()
    }

    /// All nodes in stable enumeration order
    pub fn nodes(&self) -> &[String] {
        &self.names
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of stored edges (depends on the edge policy)
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Index of a node, if present
    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Node id at `index`
    ///
    /// Panics if `index >= node_count()`.
    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    /// Targets of the out-edges of `node`, in insertion order
    pub fn out_edges(&self, node: &str) -> Result<Vec<&str>> {
        let idx = self
            .index_of(node)
            .ok_or_else(|| LinkRankError::invalid(format!("unknown node {node:?}")))?;
        Ok(self
            .successors(idx)
            .iter()
            .map(|&t| self.names[t].as_str())
            .collect())
    }

    /// Successor indices of the node at `index`
    #[inline]
    pub fn successors(&self, index: usize) -> &[usize] {
        &self.targets[self.offsets[index]..self.offsets[index + 1]]
    }

    #[inline]
    pub fn out_degree(&self, index: usize) -> usize {
        self.offsets[index + 1] - self.offsets[index]
    }

    #[inline]
    pub fn is_dead_end(&self, index: usize) -> bool {
        self.out_degree(index) == 0
    }

    /// Indices of all nodes without outgoing edges
    pub fn dead_ends(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count()).filter(|&i| self.is_dead_end(i))
    }
}

/// Incremental graph construction
#[derive(Debug, Default)]
pub struct GraphBuilder {
    names: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    seen: HashSet<(usize, usize)>,
    policy: EdgePolicy,
}

impl GraphBuilder {
    pub fn new(policy: EdgePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    fn intern(&mut self, node: &str) -> usize {
        if let Some(&idx) = self.index.get(node) {
            return idx;
        }
        let idx = self.names.len();
        self.names.push(node.to_string());
        self.index.insert(node.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Record a directed edge, creating both endpoints if needed
    pub fn add_edge(&mut self, source: &str, target: &str) {
        let s = self.intern(source);
        let t = self.intern(target);
        if self.policy == EdgePolicy::Deduplicate && !self.seen.insert((s, t)) {
            return;
        }
        self.adjacency[s].push(t);
    }

    pub fn build(self) -> Graph {
        let mut offsets = Vec::with_capacity(self.adjacency.len() + 1);
        let total: usize = self.adjacency.iter().map(Vec::len).sum();
        let mut targets = Vec::with_capacity(total);

        offsets.push(0);
        for succ in &self.adjacency {
            targets.extend_from_slice(succ);
            offsets.push(targets.len());
        }

        Graph {
            names: self.names,
            index: self.index,
            offsets,
            targets,
            policy: self.policy,
        }
    }
}
