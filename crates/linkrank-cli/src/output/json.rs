//! JSON output formatter

use anyhow::Result;
use linkrank_core::RankEntry;
use serde::Serialize;

#[derive(Serialize)]
struct RankedNode<'a> {
    rank: usize,
    node: &'a str,
    weight: f64,
}

pub fn format_ranking(entries: &[RankEntry<'_>]) -> Result<String> {
    let output: Vec<RankedNode<'_>> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| RankedNode {
            rank: i + 1,
            node: e.node,
            weight: e.weight,
        })
        .collect();

    Ok(serde_json::to_string_pretty(&output)? + "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let entries = [RankEntry { node: "A", weight: 1.0 }];
        let out = format_ranking(&entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["rank"], 1);
        assert_eq!(value[0]["node"], "A");
        assert_eq!(value[0]["weight"], 1.0);
    }

    #[test]
    fn test_empty_ranking_is_empty_array() {
        assert_eq!(format_ranking(&[]).unwrap(), "[]\n");
    }
}
