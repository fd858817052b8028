use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for fwlogger
/// CLI application to watch folders and log file events with SQLite
#[derive(Parser)]
#[command(
    name = "fwlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Watch folders, log file events to SQLite and search them with short natural-language phrases",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file and the stored watch settings
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Hour of day (0-23) for the next-business-day reminder
        #[arg(long = "remind-hour", value_name = "HOUR")]
        remind_hour: Option<u32>,
    },

    /// Watch one or more folders and log their file events
    Watch {
        /// Watch roots, ';'-delimited (defaults to the stored settings)
        #[arg(long = "dirs", value_name = "DIRS")]
        dirs: Option<String>,

        /// Extension allow-list, ';'-delimited (empty = allow all)
        #[arg(long = "ext", value_name = "EXTS")]
        ext: Option<String>,

        /// Stop after this many seconds instead of running until Ctrl+C
        #[arg(long = "duration", value_name = "SECS")]
        duration: Option<u64>,

        /// Only run the permission self-check on the watch roots
        #[arg(long = "check")]
        check: bool,
    },

    /// Search the event log
    Search {
        /// Keyword matched against file name, directory and event type
        #[arg(long, short = 'k')]
        keyword: Option<String>,

        /// Start bound (YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS")
        #[arg(long)]
        from: Option<String>,

        /// End bound (YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS")
        #[arg(long)]
        to: Option<String>,

        /// Extension filter, ';'-delimited (single value = exact match)
        #[arg(long = "ext", value_name = "EXTS")]
        ext: Option<String>,

        /// Event types, ','-delimited (created, modified, moved, deleted)
        #[arg(long = "types", value_name = "TYPES")]
        types: Option<String>,

        /// Natural-language phrase, e.g. "지난주 삭제 xlsx"
        #[arg(long, value_name = "PHRASE")]
        nlq: Option<String>,
    },

    /// Export the full event log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Summarize a memo, optionally saving selected items as pending tasks
    Memo {
        /// Read the memo from this file instead of stdin
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Item indices to save as pending tasks, ','-delimited (e.g. "1,3")
        #[arg(long, value_name = "INDICES")]
        save: Option<String>,

        /// Due date override (YYYY-MM-DD); default is the next business day
        #[arg(long, value_name = "DATE")]
        due: Option<String>,
    },

    /// List pending tasks due on a date
    Tasks {
        /// Due date (YYYY-MM-DD), defaults to today
        #[arg(long, value_name = "DATE")]
        due: Option<String>,
    },

    /// Reminder mode: toast today's due pending tasks (for the OS scheduler)
    Remind,
}
