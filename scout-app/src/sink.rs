//! Append-only CSV log of discovery runs.
//!
//! One record per run: the local timestamp, then each handle found, so rows
//! have different widths.
use anyhow::Result;
use chrono::{DateTime, Local, SecondsFormat};
use scout_social::medium::Handle;
use std::fs::OpenOptions;
use std::path::Path;

pub fn append_record(path: &Path, at: DateTime<Local>, handles: &[Handle]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_writer(file);

    let mut record = Vec::with_capacity(handles.len() + 1);
    record.push(at.to_rfc3339_opts(SecondsFormat::Secs, false));
    record.extend(handles.iter().map(|h| h.to_string()));

    writer.write_record(&record)?;
    writer.flush()?;
    Ok(())
}
