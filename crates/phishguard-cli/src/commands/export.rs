use anyhow::{Context, Result, bail};
use phishguard_core::{HistoryStore, report};
use std::fs;
use std::path::PathBuf;

/// Writes the most recent analysis to a JSON report file.
pub fn run(history: &HistoryStore, output: Option<PathBuf>) -> Result<()> {
    let Some(record) = history.latest() else {
        bail!("No analysis to export; run `phishguard analyze` first");
    };

    let document = report::export(record)?;
    let path = output.unwrap_or_else(|| PathBuf::from(report::file_name(record)));

    fs::write(&path, document)
        .context(format!("Failed to write report file: {:?}", path))?;

    println!("Report written to {}", path.display());
    Ok(())
}
