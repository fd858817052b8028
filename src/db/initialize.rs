use crate::errors::AppResult;
use crate::models::settings::DEFAULT_REMIND_HOUR;
use rusqlite::Connection;

/// Initialize the database schema.
/// Ensures the event log, tasks and settings tables exist and seeds the
/// singleton settings row with defaults on first run.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(&format!(
        "
        CREATE TABLE IF NOT EXISTS file_events (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            file_name   TEXT,
            event_time  TEXT,                -- YYYY-MM-DD HH:MM:SS
            ext         TEXT,                -- lowercase, leading dot, or ''
            dir         TEXT,
            event_type  TEXT CHECK (event_type IN ('created','modified','moved','deleted')),
            src_path    TEXT,
            dest_path   TEXT                 -- moves only
        );
        CREATE INDEX IF NOT EXISTS idx_events_time ON file_events(event_time);
        CREATE INDEX IF NOT EXISTS idx_events_name ON file_events(file_name);

        CREATE TABLE IF NOT EXISTS tasks (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            task_text   TEXT NOT NULL,
            due_date    TEXT NOT NULL,       -- YYYY-MM-DD
            status      TEXT NOT NULL DEFAULT 'pending' CHECK (status IN ('pending','done')),
            created_at  TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_tasks_due ON tasks(due_date);

        CREATE TABLE IF NOT EXISTS settings (
            id          INTEGER PRIMARY KEY CHECK (id = 1),
            watch_dir   TEXT,                -- ';'-delimited roots
            extensions  TEXT,                -- ';'-delimited allow-list
            remind_hour INTEGER DEFAULT {DEFAULT_REMIND_HOUR}
        );
        INSERT OR IGNORE INTO settings (id, watch_dir, extensions, remind_hour)
        VALUES (1, '', '', {DEFAULT_REMIND_HOUR});
        ",
    ))?;
    Ok(())
}
