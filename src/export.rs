use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::summary::DashboardSummary;

/// Write the summary for the current filter state as pretty JSON.
pub fn export_summary(summary: &DashboardSummary, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summary).context("writing summary JSON")?;
    writer.flush().context("flushing summary JSON")?;
    Ok(())
}
