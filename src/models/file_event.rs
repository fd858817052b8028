use super::event_type::EventType;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::path::Path;

/// Timestamp format shared by the stored rows and every query bound.
/// Keeping both sides on one format is what makes the string comparison
/// in `search_events` equivalent to a chronological comparison.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the append-only file event log.
#[derive(Debug, Clone, Serialize)]
pub struct FileEvent {
    pub id: i64,
    pub file_name: String,          // ⇔ file_events.file_name (base name)
    pub event_time: NaiveDateTime,  // ⇔ file_events.event_time (TEXT, second resolution)
    pub ext: String,                // ⇔ file_events.ext (lowercase, leading dot, or empty)
    pub dir: String,                // ⇔ file_events.dir (parent directory)
    pub event_type: EventType,      // ⇔ file_events.event_type
    pub src_path: String,           // ⇔ file_events.src_path (always present)
    pub dest_path: Option<String>,  // ⇔ file_events.dest_path (moves only)
}

impl FileEvent {
    /// Build a candidate event from the paths reported by the watcher.
    /// `event_time` is assigned here, at ingestion, not from any OS-reported
    /// timestamp. Name, directory and extension are derived from the
    /// destination path when present (moves), from the source path otherwise.
    pub fn from_paths(event_type: EventType, src: &Path, dest: Option<&Path>) -> Self {
        let effective = dest.unwrap_or(src);
        Self {
            id: 0,
            file_name: effective
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            event_time: Local::now().naive_local(),
            ext: extension_of(effective),
            dir: effective
                .parent()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
            event_type,
            src_path: src.to_string_lossy().to_string(),
            dest_path: dest.map(|p| p.to_string_lossy().to_string()),
        }
    }

    pub fn time_str(&self) -> String {
        self.event_time.format(TIME_FORMAT).to_string()
    }
}

/// Lowercased extension with a leading dot, or an empty string.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}
