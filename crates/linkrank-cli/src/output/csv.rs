//! CSV output formatter

use anyhow::Result;
use linkrank_core::{GraphStats, RankEntry};

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().map_err(|e| e.into_error())?)?)
}

pub fn format_ranking(entries: &[RankEntry<'_>]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["rank", "node", "weight"])?;

    for (i, e) in entries.iter().enumerate() {
        writer.write_record([(i + 1).to_string(), e.node.to_string(), e.weight.to_string()])?;
    }

    finish(writer)
}

/// One table for several rankings, keyed by a leading `method` column
pub fn format_methods(sections: &[(&str, &[RankEntry<'_>])]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["method", "rank", "node", "weight"])?;

    for (method, entries) in sections {
        for (i, e) in entries.iter().enumerate() {
            writer.write_record([
                method.to_string(),
                (i + 1).to_string(),
                e.node.to_string(),
                e.weight.to_string(),
            ])?;
        }
    }

    finish(writer)
}

pub fn format_stats(stats: &GraphStats) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.serialize(stats)?;
    finish(writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quotes_nodes_with_commas() {
        let entries = [RankEntry { node: "a,b", weight: 0.5 }];
        let out = format_ranking(&entries).unwrap();
        assert_eq!(out, "rank,node,weight\n1,\"a,b\",0.5\n");
    }

    #[test]
    fn test_methods_share_one_header() {
        let walks = [RankEntry { node: "A", weight: 0.5 }];
        let probs = [
            RankEntry { node: "A", weight: 0.75 },
            RankEntry { node: "B", weight: 0.25 },
        ];
        let out = format_methods(&[("stochastic", &walks), ("distribution", &probs)]).unwrap();
        assert_eq!(
            out,
            "method,rank,node,weight\n\
             stochastic,1,A,0.5\n\
             distribution,1,A,0.75\n\
             distribution,2,B,0.25\n"
        );
    }

    #[test]
    fn test_stats_header_and_row() {
        let graph: linkrank_core::Graph = "A B\nB C\nC A\nA D\n".parse().unwrap();
        let out = format_stats(&linkrank_core::stats(&graph)).unwrap();
        assert_eq!(
            out,
            "nodes,edges,dead_ends,diameter,strongly_connected\n4,4,1,3,false\n"
        );
    }
}
