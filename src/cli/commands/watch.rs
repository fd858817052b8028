use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::guard;
use crate::core::watcher::FileWatcher;
use crate::db::pool::DbPool;
use crate::db::queries::{get_settings, update_settings};
use crate::errors::AppResult;
use crate::models::settings::Settings;
use crate::ui::messages;
use crate::utils::path::expand_tilde;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Handle the `watch` command: resolve the roots and allow-list (flags win
/// over stored settings), persist them, then run the watcher until Ctrl+C
/// or `--duration` elapses.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        dirs,
        ext,
        duration,
        check,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let mut settings = get_settings(&pool.conn)?;

        let roots: Vec<String> = match dirs {
            Some(raw) => Settings::split_list(raw)
                .iter()
                .map(|d| expand_tilde(d).to_string_lossy().to_string())
                .collect(),
            None => settings.watch_dirs.clone(),
        };
        let extensions = match ext {
            Some(raw) => Settings::split_list(raw),
            None => settings.extensions.clone(),
        };

        if *check {
            println!("{}", guard::check_dirs(&roots));
            return Ok(());
        }

        // Persist the resolved configuration before starting, like every
        // configuration change.
        settings.watch_dirs = roots.clone();
        settings.extensions = extensions.clone();
        update_settings(&pool.conn, &settings)?;

        let mut watcher = FileWatcher::new(Path::new(&cfg.database));
        watcher.start(&roots, &extensions)?;

        messages::info(format!(
            "watching {} root(s), allow-list: [{}]",
            roots.len(),
            extensions.join(", ")
        ));

        match duration {
            Some(secs) => {
                thread::sleep(Duration::from_secs(*secs));
                watcher.stop();
                messages::success("watch stopped");
            }
            // Without --duration the process runs until killed; the watcher
            // drops (and stops) with it.
            None => {
                messages::info("press Ctrl+C to stop");
                loop {
                    thread::sleep(Duration::from_secs(3600));
                }
            }
        }
    }
    Ok(())
}
