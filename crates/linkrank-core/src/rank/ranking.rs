//! Rank mapping produced by the estimators

use crate::graph::Graph;
use serde::Serialize;
use std::collections::HashMap;

/// One node and its estimated weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankEntry<'a> {
    pub node: &'a str,
    pub weight: f64,
}

/// Mapping from node id to a non-negative weight.
///
/// Iteration follows the graph's node order; [`Ranking::sorted`] gives the
/// descending view with ties broken by node id.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    names: Vec<String>,
    index: HashMap<String, usize>,
    weights: Vec<f64>,
}

impl Ranking {
    pub(crate) fn from_graph(graph: &Graph, weights: Vec<f64>) -> Self {
        debug_assert_eq!(graph.node_count(), weights.len());
        Self::from_entries(graph.nodes().iter().cloned().zip(weights))
    }

    /// Build a ranking from explicit `(node, weight)` pairs
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut names = Vec::new();
        let mut weights = Vec::new();
        let mut index = HashMap::new();
        for (name, weight) in entries {
            if let Some(&i) = index.get(&name) {
                weights[i] = weight;
                continue;
            }
            index.insert(name.clone(), names.len());
            names.push(name);
            weights.push(weight);
        }
        Self {
            names,
            index,
            weights,
        }
    }

    pub fn get(&self, node: &str) -> Option<f64> {
        self.index.get(node).map(|&i| self.weights[i])
    }

    pub fn contains(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weights in node order
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = RankEntry<'_>> {
        self.names
            .iter()
            .zip(&self.weights)
            .map(|(node, &weight)| RankEntry { node, weight })
    }

    /// All entries, heaviest first; equal weights ordered by node id
    pub fn sorted(&self) -> Vec<RankEntry<'_>> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.node.cmp(b.node))
        });
        entries
    }

    /// The `k` heaviest entries
    pub fn top(&self, k: usize) -> Vec<RankEntry<'_>> {
        let mut entries = self.sorted();
        entries.truncate(k);
        entries
    }

    pub fn into_map(self) -> HashMap<String, f64> {
        self.names.into_iter().zip(self.weights).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(pairs: &[(&str, f64)]) -> Ranking {
        Ranking::from_entries(pairs.iter().map(|&(n, w)| (n.to_string(), w)))
    }

    #[test]
    fn test_sorted_descending_with_tie_break() {
        let r = ranking(&[("c", 0.25), ("a", 0.25), ("b", 0.5)]);
        let order: Vec<_> = r.sorted().iter().map(|e| e.node).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_top_k() {
        let r = ranking(&[("a", 0.1), ("b", 0.6), ("c", 0.3)]);
        let top = r.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].node, "b");
        assert_eq!(top[1].node, "c");
        assert_eq!(r.top(10).len(), 3);
    }

    #[test]
    fn test_lookup_and_total() {
        let r = ranking(&[("a", 0.4), ("b", 0.6)]);
        assert_eq!(r.get("a"), Some(0.4));
        assert_eq!(r.get("z"), None);
        assert!((r.total() - 1.0).abs() < 1e-12);
        assert_eq!(r.into_map().len(), 2);
    }

    #[test]
    fn test_iter_keeps_node_order() {
        let r = ranking(&[("x", 0.1), ("y", 0.9)]);
        let nodes: Vec<_> = r.iter().map(|e| e.node).collect();
        assert_eq!(nodes, vec!["x", "y"]);
    }
}
