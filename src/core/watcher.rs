//! Filesystem watcher: subscribes to OS change notifications for a set of
//! root directories (recursive), classifies each notification and appends
//! accepted events to the store.
//!
//! State machine: `Stopped --start--> Running --stop--> Stopped`, nothing
//! else. Starting twice is an explicit error; stopping is idempotent.

use crate::core::guard::is_safe_watch_dir;
use crate::db::pool::open_connection;
use crate::db::queries::insert_event;
use crate::errors::{AppError, AppResult};
use crate::models::event_type::EventType;
use crate::models::file_event::FileEvent;
use crate::ui::messages;
use notify::event::{CreateKind, ModifyKind, RemoveKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use rusqlite::Connection;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Bounded wait applied by `stop()`; if the worker has not drained by then
/// the stop is still considered complete.
const STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// Poll interval of the ingestion loop; doubles as the stop-signal latency.
const RECV_TIMEOUT: Duration = Duration::from_millis(100);

struct WatchHandle {
    watcher: RecommendedWatcher,
    stop_tx: Sender<()>,
    worker: JoinHandle<()>,
}

pub struct FileWatcher {
    db_path: PathBuf,
    handle: Option<WatchHandle>,
}

impl FileWatcher {
    pub fn new(db_path: &Path) -> Self {
        Self {
            db_path: db_path.to_path_buf(),
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Begin watching every root recursively. Fails with `Config` when
    /// `roots` is empty or a root is missing or outside the home tree, with
    /// `AlreadyRunning` on a redundant start (no state change either way).
    pub fn start(&mut self, roots: &[String], extensions: &[String]) -> AppResult<()> {
        if self.handle.is_some() {
            return Err(AppError::AlreadyRunning);
        }
        if roots.is_empty() {
            return Err(AppError::Config("no watch roots configured".to_string()));
        }

        let bad: Vec<&str> = roots
            .iter()
            .filter(|r| !Path::new(r.as_str()).is_dir() || !is_safe_watch_dir(r))
            .map(|r| r.as_str())
            .collect();
        if !bad.is_empty() {
            return Err(AppError::Config(format!(
                "unsafe or missing watch roots: {}",
                bad.join(", ")
            )));
        }

        let allow = normalize_allow_list(extensions);

        // The worker thread gets its own connection so a storage fault stays
        // local to the ingestion loop.
        let conn = open_connection(&self.db_path)?;

        let (event_tx, event_rx) = mpsc::channel::<Event>();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = event_tx.send(event);
                }
            },
            Config::default(),
        )?;
        for root in roots {
            watcher.watch(Path::new(root), RecursiveMode::Recursive)?;
        }

        let worker = thread::spawn(move || ingest_loop(conn, event_rx, stop_rx, allow));

        self.handle = Some(WatchHandle {
            watcher,
            stop_tx,
            worker,
        });
        Ok(())
    }

    /// Idempotent. Unsubscribes, signals the worker and waits up to
    /// [`STOP_TIMEOUT`] for it to finish; transitions to Stopped regardless.
    pub fn stop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        // Dropping the subscription closes the event channel; the stop
        // signal covers the case where events are still queued.
        drop(handle.watcher);
        let _ = handle.stop_tx.send(());

        let deadline = Instant::now() + STOP_TIMEOUT;
        while !handle.worker.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(50));
        }
        if handle.worker.is_finished() {
            let _ = handle.worker.join();
        }
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Drains the notification channel until stopped or disconnected. A failed
/// insert is logged and the loop continues; one bad event must not stop the
/// watch.
fn ingest_loop(
    conn: Connection,
    event_rx: Receiver<Event>,
    stop_rx: Receiver<()>,
    allow: HashSet<String>,
) {
    loop {
        if stop_rx.try_recv().is_ok() {
            break;
        }
        match event_rx.recv_timeout(RECV_TIMEOUT) {
            Ok(event) => {
                if let Some(candidate) = classify(&event)
                    && (allow.is_empty() || allow.contains(&candidate.ext))
                    && let Err(e) = insert_event(&conn, &candidate)
                {
                    messages::warning(format!("event insert failed: {e}"));
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

/// Map one raw notification to at most one candidate event.
///
/// Renames reported with both paths become `moved`; one-sided renames
/// degrade to `created`/`deleted` since only one end is known. Access and
/// unclassified kinds are discarded, as is anything that resolves to a
/// directory. Backends that tag the kind (`CreateKind::Folder`,
/// `RemoveKind::Folder`) are trusted first; the existence check at the end
/// is the fallback for untagged kinds, and cannot cover removals since the
/// path is already gone.
fn classify(event: &Event) -> Option<FileEvent> {
    let src = event.paths.first()?.as_path();

    let (event_type, dest) = match &event.kind {
        EventKind::Create(CreateKind::Folder) => return None,
        EventKind::Create(_) => (EventType::Created, None),
        EventKind::Remove(RemoveKind::Folder) => return None,
        EventKind::Remove(_) => (EventType::Deleted, None),
        EventKind::Modify(ModifyKind::Name(mode)) => match mode {
            RenameMode::Both if event.paths.len() >= 2 => {
                (EventType::Moved, Some(event.paths[1].as_path()))
            }
            RenameMode::From => (EventType::Deleted, None),
            RenameMode::To => (EventType::Created, None),
            // Which side this is was not reported; decide from existence.
            _ => {
                if src.exists() {
                    (EventType::Created, None)
                } else {
                    (EventType::Deleted, None)
                }
            }
        },
        EventKind::Modify(_) => (EventType::Modified, None),
        _ => return None,
    };

    // Directory-only notifications are never stored.
    if dest.unwrap_or(src).is_dir() {
        return None;
    }

    Some(FileEvent::from_paths(event_type, src, dest))
}

/// Lowercase, ensure the leading dot, drop blanks. An empty result means
/// "allow everything".
fn normalize_allow_list(extensions: &[String]) -> HashSet<String> {
    extensions
        .iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .map(|e| {
            if e.starts_with('.') {
                e
            } else {
                format!(".{e}")
            }
        })
        .collect()
}
