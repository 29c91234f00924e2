//! Comparing two rankings of the same graph

use super::Ranking;
use crate::error::{LinkRankError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// How closely two rankings agree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Sum of absolute weight differences
    pub l1_distance: f64,
    pub max_abs_diff: f64,
    /// Node with the largest absolute difference
    pub max_diff_node: Option<String>,
    pub top_k: usize,
    /// Fraction of the top-k nodes that appear in both top-k lists
    pub top_k_overlap: f64,
    /// Both rankings put the same node first
    pub same_leader: bool,
}

/// Compare two rankings over the same node set
pub fn compare(a: &Ranking, b: &Ranking, k: usize) -> Result<Comparison> {
    if a.len() != b.len() || a.iter().any(|e| !b.contains(e.node)) {
        return Err(LinkRankError::invalid("rankings must cover the same set of nodes"));
    }

    let mut l1_distance = 0.0;
    let mut max_abs_diff = 0.0;
    let mut max_diff_node = None;
    for entry in a.iter() {
        let other = b.get(entry.node).unwrap_or_default();
        let diff = (entry.weight - other).abs();
        l1_distance += diff;
        if diff > max_abs_diff {
            max_abs_diff = diff;
            max_diff_node = Some(entry.node.to_string());
        }
    }

    let top_a = a.top(k);
    let top_b = b.top(k);
    let in_b: HashSet<&str> = top_b.iter().map(|e| e.node).collect();
    let shared = top_a.iter().filter(|e| in_b.contains(e.node)).count();
    let top_k_overlap = if top_a.is_empty() {
        1.0
    } else {
        shared as f64 / top_a.len() as f64
    };
    let same_leader = match (top_a.first(), top_b.first()) {
        (Some(x), Some(y)) => x.node == y.node,
        _ => true,
    };

    Ok(Comparison {
        l1_distance,
        max_abs_diff,
        max_diff_node,
        top_k: top_a.len(),
        top_k_overlap,
        same_leader,
    })
}

/// A value together with the wall-clock time it took to produce
#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Run `f` and record how long it took
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// How many times faster `fast` was than `slow`
pub fn speedup(slow: Duration, fast: Duration) -> Option<f64> {
    if fast.is_zero() {
        None
    } else {
        Some(slow.as_secs_f64() / fast.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(pairs: &[(&str, f64)]) -> Ranking {
        Ranking::from_entries(pairs.iter().map(|&(n, w)| (n.to_string(), w)))
    }

    #[test]
    fn test_identical_rankings() {
        let r = ranking(&[("a", 0.5), ("b", 0.3), ("c", 0.2)]);
        let c = compare(&r, &r, 2).unwrap();
        assert_eq!(c.l1_distance, 0.0);
        assert_eq!(c.max_diff_node, None);
        assert_eq!(c.top_k_overlap, 1.0);
        assert!(c.same_leader);
    }

    #[test]
    fn test_differences() {
        let a = ranking(&[("a", 0.5), ("b", 0.3), ("c", 0.2)]);
        let b = ranking(&[("a", 0.2), ("b", 0.3), ("c", 0.5)]);
        let c = compare(&a, &b, 1).unwrap();
        assert!((c.l1_distance - 0.6).abs() < 1e-12);
        assert!((c.max_abs_diff - 0.3).abs() < 1e-12);
        assert_eq!(c.max_diff_node.as_deref(), Some("a"));
        assert_eq!(c.top_k, 1);
        assert_eq!(c.top_k_overlap, 0.0);
        assert!(!c.same_leader);
    }

    #[test]
    fn test_mismatched_node_sets() {
        let a = ranking(&[("a", 0.5), ("b", 0.5)]);
        let b = ranking(&[("a", 0.5), ("z", 0.5)]);
        assert!(matches!(
            compare(&a, &b, 2),
            Err(LinkRankError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_speedup() {
        let s = speedup(Duration::from_secs(10), Duration::from_secs(2)).unwrap();
        assert!((s - 5.0).abs() < 1e-12);
        assert_eq!(speedup(Duration::from_secs(1), Duration::ZERO), None);
    }

    #[test]
    fn test_timed_returns_value() {
        let t = timed(|| 40 + 2);
        assert_eq!(t.value, 42);
        assert!(t.seconds() >= 0.0);
    }
}
