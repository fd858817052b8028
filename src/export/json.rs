use crate::models::file_event::FileEvent;
use std::fs::File;

pub fn write_json(path: &str, events: &[FileEvent]) -> std::io::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, events)?;
    Ok(())
}
