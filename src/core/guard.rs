//! Path safety guard: a watch root is only acceptable inside the user's
//! home tree. The watcher itself cannot tell privileged trees apart, so the
//! check happens before any subscription is registered.

use std::fs;
use std::path::Path;

/// True iff `path` resolves (symlinks included) to the home directory or to
/// a descendant of it. Any resolution failure — nonexistent path, permission
/// error, malformed input — yields false, never an error.
pub fn is_safe_watch_dir(path: &str) -> bool {
    let Some(home) = dirs::home_dir() else {
        return false;
    };
    let Ok(home) = home.canonicalize() else {
        return false;
    };
    let Ok(resolved) = Path::new(path).canonicalize() else {
        return false;
    };
    resolved.starts_with(&home)
}

/// Self-check report for a list of candidate watch dirs: classifies each as
/// blocked (missing or outside home), warning (read or write probe failed)
/// or accessible.
pub fn check_dirs(dirs: &[String]) -> String {
    let mut ok = Vec::new();
    let mut warn = Vec::new();
    let mut block = Vec::new();

    for one in dirs {
        let pref = format!("- {one}");
        if !Path::new(one).is_dir() {
            block.push(format!("{pref}  [blocked] path does not exist"));
            continue;
        }
        if !is_safe_watch_dir(one) {
            block.push(format!("{pref}  [blocked] only home-relative paths allowed"));
            continue;
        }
        if let Err(e) = fs::read_dir(one) {
            warn.push(format!("{pref}  [warn] read error: {e}"));
            continue;
        }
        let probe = Path::new(one).join(".fwl_perm_test.tmp");
        match fs::write(&probe, "ok") {
            Ok(()) => {
                let _ = fs::remove_file(&probe);
                ok.push(format!("{pref}  [ok] accessible"));
            }
            Err(e) => warn.push(format!("{pref}  [warn] write failed: {e}")),
        }
    }

    let mut report = vec!["Watch dir self-check".to_string(), String::new()];
    if !block.is_empty() {
        report.push("[blocked]".to_string());
        report.extend(block);
        report.push(String::new());
    }
    if !warn.is_empty() {
        report.push("[warnings]".to_string());
        report.extend(warn);
        report.push(String::new());
    }
    if !ok.is_empty() {
        report.push("[accessible]".to_string());
        report.extend(ok);
    }
    if report.len() == 2 {
        report.push("nothing to check".to_string());
    }
    report.join("\n")
}
