use crate::models::file_event::FileEvent;
use csv::Writer;

/// Write the event log as delimited text: fixed header row, one row per
/// event, in the order given (newest first for a full export).
pub fn write_csv(path: &str, events: &[FileEvent]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "file_name",
        "event_time",
        "ext",
        "dir",
        "event_type",
        "src_path",
        "dest_path",
    ])?;

    for ev in events {
        wtr.write_record(&[
            ev.file_name.clone(),
            ev.time_str(),
            ev.ext.clone(),
            ev.dir.clone(),
            ev.event_type.to_db_str().to_string(),
            ev.src_path.clone(),
            ev.dest_path.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
