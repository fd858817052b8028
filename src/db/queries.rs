use crate::core::memo::parse_memo;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::EventType;
use crate::models::file_event::{FileEvent, TIME_FORMAT};
use crate::models::filter::EventFilter;
use crate::models::settings::Settings;
use crate::models::task::{Task, TaskStatus};
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

/// Hard cap on query results. Callers needing more page by tightening the
/// time bound; this is a contract, not a tunable.
pub const QUERY_LIMIT: usize = 1000;

const EVENT_COLUMNS: &str =
    "id, file_name, event_time, ext, dir, event_type, src_path, dest_path";

pub fn map_event_row(row: &Row) -> Result<FileEvent> {
    let time_str: String = row.get("event_time")?;
    let event_time = NaiveDateTime::parse_from_str(&time_str, TIME_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(time_str.clone())),
        )
    })?;

    let type_str: String = row.get("event_type")?;
    let event_type = EventType::from_db_str(&type_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidEventType(type_str.clone())),
        )
    })?;

    Ok(FileEvent {
        id: row.get("id")?,
        file_name: row.get("file_name")?,
        event_time,
        ext: row.get("ext")?,
        dir: row.get("dir")?,
        event_type,
        src_path: row.get("src_path")?,
        dest_path: row.get("dest_path")?,
    })
}

/// Append one event to the log. Single statement, so the watcher thread and
/// foreground readers never observe a partial row. Rows are immutable once
/// written; there is no update or delete counterpart.
pub fn insert_event(conn: &Connection, ev: &FileEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO file_events (file_name, event_time, ext, dir, event_type, src_path, dest_path)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            ev.file_name,
            ev.time_str(),
            ev.ext,
            ev.dir,
            ev.event_type.to_db_str(),
            ev.src_path,
            ev.dest_path,
        ],
    )?;
    Ok(())
}

/// Filtered read of the event log: newest first, ties broken by insertion
/// order (id) descending, capped at [`QUERY_LIMIT`] rows.
pub fn search_events(conn: &Connection, filter: &EventFilter) -> AppResult<Vec<FileEvent>> {
    let mut sql = format!("SELECT {EVENT_COLUMNS} FROM file_events WHERE 1=1");
    let mut bound: Vec<String> = Vec::new();

    if !filter.keyword.is_empty() {
        sql.push_str(" AND (file_name LIKE ? OR dir LIKE ? OR event_type LIKE ?)");
        let like = format!("%{}%", filter.keyword);
        bound.push(like.clone());
        bound.push(like.clone());
        bound.push(like);
    }
    if let Some(start) = filter.start {
        sql.push_str(" AND event_time >= ?");
        bound.push(start.format(TIME_FORMAT).to_string());
    }
    if let Some(end) = filter.end {
        sql.push_str(" AND event_time <= ?");
        bound.push(end.format(TIME_FORMAT).to_string());
    }
    if !filter.extensions.is_empty() {
        let placeholders = vec!["?"; filter.extensions.len()].join(",");
        sql.push_str(&format!(" AND ext IN ({placeholders})"));
        for ext in &filter.extensions {
            bound.push(ext.to_lowercase());
        }
    }
    if !filter.event_types.is_empty() {
        let placeholders = vec!["?"; filter.event_types.len()].join(",");
        sql.push_str(&format!(" AND event_type IN ({placeholders})"));
        for et in &filter.event_types {
            bound.push(et.to_db_str().to_string());
        }
    }
    sql.push_str(&format!(" ORDER BY event_time DESC, id DESC LIMIT {QUERY_LIMIT}"));

    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(bound.iter()), map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Full dump for export: every row, newest first, no cap.
pub fn load_all_events(conn: &Connection) -> AppResult<Vec<FileEvent>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {EVENT_COLUMNS} FROM file_events ORDER BY event_time DESC, id DESC"
    ))?;
    let rows = stmt.query_map([], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_settings(conn: &Connection) -> AppResult<Settings> {
    let mut stmt =
        conn.prepare("SELECT watch_dir, extensions, remind_hour FROM settings WHERE id = 1")?;
    let settings = stmt.query_row([], |row| {
        let dirs: String = row.get::<_, Option<String>>(0)?.unwrap_or_default();
        let exts: String = row.get::<_, Option<String>>(1)?.unwrap_or_default();
        Ok(Settings {
            watch_dirs: Settings::split_list(&dirs),
            extensions: Settings::split_list(&exts),
            remind_hour: row.get(2)?,
        })
    })?;
    Ok(settings)
}

/// Replace the singleton settings row.
pub fn update_settings(conn: &Connection, settings: &Settings) -> AppResult<()> {
    conn.execute(
        "UPDATE settings SET watch_dir = ?1, extensions = ?2, remind_hour = ?3 WHERE id = 1",
        params![
            settings.dirs_str(),
            settings.extensions_str(),
            settings.remind_hour,
        ],
    )?;
    Ok(())
}

/// Parse `memo_text` into items and persist one pending task per selected
/// index. All inserts share one transaction so a partial save never becomes
/// visible.
pub fn insert_tasks_from_selection(
    conn: &mut Connection,
    indices: &[usize],
    memo_text: &str,
    due_date: NaiveDate,
) -> AppResult<usize> {
    let items = parse_memo(memo_text);
    let now = Local::now().naive_local().format(TIME_FORMAT).to_string();

    let tx = conn.transaction()?;
    let mut saved = 0;
    for item in &items {
        if indices.contains(&item.index) {
            tx.execute(
                "INSERT INTO tasks (task_text, due_date, status, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    format!("#{} {}", item.index, item.title),
                    due_date.format("%Y-%m-%d").to_string(),
                    TaskStatus::Pending.to_db_str(),
                    now,
                ],
            )?;
            saved += 1;
        }
    }
    tx.commit()?;
    Ok(saved)
}

fn map_task_row(row: &Row) -> Result<Task> {
    let due_str: String = row.get("due_date")?;
    let due_date = NaiveDate::parse_from_str(&due_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(due_str.clone())),
        )
    })?;

    let status_str: String = row.get("status")?;
    let status = TaskStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTaskStatus(status_str.clone())),
        )
    })?;

    Ok(Task {
        id: row.get("id")?,
        task_text: row.get("task_text")?,
        due_date,
        status,
        created_at: row.get("created_at")?,
    })
}

/// Pending tasks due on `date`, oldest first.
pub fn get_due_tasks(conn: &Connection, date: NaiveDate) -> AppResult<Vec<Task>> {
    let mut stmt = conn.prepare(
        "SELECT id, task_text, due_date, status, created_at FROM tasks
         WHERE due_date = ?1 AND status = 'pending'
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([date.format("%Y-%m-%d").to_string()], map_task_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
