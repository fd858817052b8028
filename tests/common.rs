#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use fwlogger::models::event_type::EventType;
use fwlogger::models::file_event::{FileEvent, TIME_FORMAT};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fwl() -> Command {
    cargo_bin_cmd!("fwlogger")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fwlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{db_path}-wal")).ok();
    fs::remove_file(format!("{db_path}-shm")).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema on a fresh DB and hand back an open connection
pub fn open_initialized(db_path: &str) -> rusqlite::Connection {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    fwlogger::db::initialize::init_db(&conn).expect("init db");
    conn
}

pub fn parse_time(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, TIME_FORMAT).expect("valid test timestamp")
}

/// Build an event row with explicit fields for store-level tests
pub fn make_event(
    file_name: &str,
    time: &str,
    ext: &str,
    dir: &str,
    event_type: EventType,
    src_path: &str,
    dest_path: Option<&str>,
) -> FileEvent {
    FileEvent {
        id: 0,
        file_name: file_name.to_string(),
        event_time: parse_time(time),
        ext: ext.to_string(),
        dir: dir.to_string(),
        event_type,
        src_path: src_path.to_string(),
        dest_path: dest_path.map(str::to_string),
    }
}

/// Shorthand for a created-file event at `time`
pub fn created(name: &str, time: &str) -> FileEvent {
    let src = format!("/home/user/docs/{name}");
    let ext = name
        .rsplit_once('.')
        .map(|(_, e)| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();
    make_event(name, time, &ext, "/home/user/docs", EventType::Created, &src, None)
}
