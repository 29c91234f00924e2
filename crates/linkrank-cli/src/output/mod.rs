//! Output formatters

pub mod csv;
pub mod json;
pub mod plain;
pub mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use linkrank_core::RankEntry;
use std::path::Path;

/// Format ranked entries (already sorted and truncated)
pub fn format_ranking(entries: &[RankEntry<'_>], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Cli => terminal::format_ranking(entries),
        OutputFormat::Plain => plain::format_ranking(entries),
        OutputFormat::Json => json::format_ranking(entries)?,
        OutputFormat::Csv => csv::format_ranking(entries)?,
    })
}

/// Format several labelled rankings as a single machine-readable table.
///
/// Only `plain` and `csv` are tabular; the other formats have their own
/// report layouts and are rejected here.
pub fn format_methods(
    sections: &[(&str, &[RankEntry<'_>])],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(plain::format_methods(sections)),
        OutputFormat::Csv => csv::format_methods(sections),
        OutputFormat::Cli | OutputFormat::Json => {
            anyhow::bail!("only plain and csv output can hold several rankings")
        }
    }
}

/// Write every entry as `node weight` lines to `path`
pub fn write_ranking_file(path: &Path, entries: &[RankEntry<'_>]) -> Result<()> {
    std::fs::write(path, plain::format_ranking(entries))?;
    tracing::info!("Wrote {} ranks to {}", entries.len(), path.display());
    Ok(())
}
