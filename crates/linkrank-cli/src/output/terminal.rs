//! Terminal output formatter

use linkrank_core::RankEntry;

/// Percentage and node id per line, heaviest first
pub fn format_ranking(entries: &[RankEntry<'_>]) -> String {
    let mut output = String::new();

    for entry in entries {
        output.push_str(&format!("{:>6.2}\t{}\n", 100.0 * entry.weight, entry.node));
    }

    output
}
