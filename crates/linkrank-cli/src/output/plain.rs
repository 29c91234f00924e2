//! Plain `node weight` output

use linkrank_core::RankEntry;

pub fn format_ranking(entries: &[RankEntry<'_>]) -> String {
    entries
        .iter()
        .map(|e| format!("{} {}\n", e.node, e.weight))
        .collect()
}

/// `method node weight` lines for several rankings
pub fn format_methods(sections: &[(&str, &[RankEntry<'_>])]) -> String {
    sections
        .iter()
        .flat_map(|(method, entries)| {
            entries
                .iter()
                .map(move |e| format!("{} {} {}\n", method, e.node, e.weight))
        })
        .collect()
}
