//! SQLite connection wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database at `path` and apply the pragmas used by every
    /// connection: WAL so the watcher thread and foreground queries can
    /// overlap, NORMAL sync since the log is not irreplaceable data.
    pub fn new(path: &str) -> Result<Self> {
        let conn = open_connection(Path::new(path))?;
        Ok(Self { conn })
    }
}

pub fn open_connection(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;
    Ok(conn)
}
