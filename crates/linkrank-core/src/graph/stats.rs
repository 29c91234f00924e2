//! Graph statistics

use super::model::Graph;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::VecDeque;

/// Summary of a loaded graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub dead_ends: usize,
    pub diameter: usize,
    pub strongly_connected: bool,
}

/// Breadth-first search from `source`; returns (eccentricity, reached count)
fn eccentricity(graph: &Graph, source: usize) -> (usize, usize) {
    let mut dist = vec![usize::MAX; graph.node_count()];
    let mut queue = VecDeque::new();
    dist[source] = 0;
    queue.push_back(source);

    let mut farthest = 0;
    let mut reached = 1;
    while let Some(u) = queue.pop_front() {
        for &v in graph.successors(u) {
            if dist[v] == usize::MAX {
                dist[v] = dist[u] + 1;
                farthest = farthest.max(dist[v]);
                reached += 1;
                queue.push_back(v);
            }
        }
    }
    (farthest, reached)
}

fn eccentricities(graph: &Graph) -> Vec<(usize, usize)> {
    (0..graph.node_count())
        .into_par_iter()
        .map(|source| eccentricity(graph, source))
        .collect()
}

/// Longest finite shortest path between any two nodes.
///
/// Pairs with no directed path between them are ignored, so on a graph that
/// is not strongly connected this is the diameter of the reachability
/// relation rather than infinity.
pub fn diameter(graph: &Graph) -> usize {
    eccentricities(graph)
        .into_iter()
        .map(|(ecc, _)| ecc)
        .max()
        .unwrap_or(0)
}

/// Collect node/edge counts, dead ends and the diameter in one pass
pub fn stats(graph: &Graph) -> GraphStats {
    let n = graph.node_count();
    let ecc = eccentricities(graph);

    GraphStats {
        nodes: n,
        edges: graph.edge_count(),
        dead_ends: graph.dead_ends().count(),
        diameter: ecc.iter().map(|&(e, _)| e).max().unwrap_or(0),
        strongly_connected: n > 0 && ecc.iter().all(|&(_, reached)| reached == n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_diameter() {
        let g: Graph = "A B\nB C\nC D\nD A\n".parse().unwrap();
        let s = stats(&g);
        assert_eq!(s.diameter, 3);
        assert!(s.strongly_connected);
        assert_eq!(s.dead_ends, 0);
    }

    #[test]
    fn test_path_is_not_strongly_connected() {
        let g: Graph = "A B\nB C\n".parse().unwrap();
        let s = stats(&g);
        assert_eq!(s.diameter, 2);
        assert!(!s.strongly_connected);
        assert_eq!(s.dead_ends, 1);
    }

    #[test]
    fn test_hub_diameter() {
        let g: Graph = "A B\nA C\nB A\nC A\n".parse().unwrap();
        assert_eq!(diameter(&g), 2);
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph = "".parse().unwrap();
        let s = stats(&g);
        assert_eq!(s.diameter, 0);
        assert!(!s.strongly_connected);
    }
}
