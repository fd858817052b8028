mod csv;
mod json;

pub use csv::write_csv;
pub use json::write_json;

use crate::errors::{AppError, AppResult};
use crate::models::file_event::FileEvent;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `events` (already time-descending) to `path` in the requested
/// format. Refuses to overwrite an existing file unless `force` is set.
pub fn export_events(
    format: &ExportFormat,
    path: &str,
    events: &[FileEvent],
    force: bool,
) -> AppResult<()> {
    if Path::new(path).exists() && !force {
        return Err(AppError::Export(format!(
            "file '{path}' already exists (use --force to overwrite)"
        )));
    }
    match format {
        ExportFormat::Csv => write_csv(path, events)?,
        ExportFormat::Json => write_json(path, events)?,
    }
    Ok(())
}
