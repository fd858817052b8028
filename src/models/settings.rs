use serde::Serialize;

pub const DEFAULT_REMIND_HOUR: u32 = 9;

/// Delimiter used for the watch_dir and extensions columns.
const LIST_SEP: &str = ";";

/// The mutable singleton settings row (id = 1).
///
/// Watch dirs and the extension allow-list are persisted as ';'-delimited
/// strings; an empty allow-list means "allow all".
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub watch_dirs: Vec<String>,
    pub extensions: Vec<String>,
    pub remind_hour: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            watch_dirs: Vec::new(),
            extensions: Vec::new(),
            remind_hour: DEFAULT_REMIND_HOUR,
        }
    }
}

impl Settings {
    pub fn dirs_str(&self) -> String {
        self.watch_dirs.join(LIST_SEP)
    }

    pub fn extensions_str(&self) -> String {
        self.extensions.join(LIST_SEP)
    }

    /// Split a persisted ';'-delimited list, trimming and dropping blanks.
    pub fn split_list(raw: &str) -> Vec<String> {
        raw.split(LIST_SEP)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
