use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::memo::summarize_memo;
use crate::core::remind::next_business_day;
use crate::db::pool::DbPool;
use crate::db::queries::{get_settings, insert_tasks_from_selection};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::date::parse_date;
use chrono::Local;
use std::fs;
use std::io::Read;

/// Handle the `memo` command: print the item summary, and with `--save`
/// persist the selected items as pending tasks due on the next business day
/// (or an explicit `--due` date).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Memo { file, save, due } = cmd {
        let text = read_memo(file.as_deref())?;

        println!("{}", summarize_memo(&text));

        if let Some(raw_indices) = save {
            let indices = parse_indices(raw_indices)?;

            let mut pool = DbPool::new(&cfg.database)?;
            let due_date = match due {
                Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => {
                    let settings = get_settings(&pool.conn)?;
                    next_business_day(Local::now().naive_local(), settings.remind_hour).date()
                }
            };

            let saved = insert_tasks_from_selection(&mut pool.conn, &indices, &text, due_date)?;
            messages::success(format!("{saved} task(s) saved, due {due_date}"));
        }
    }
    Ok(())
}

fn read_memo(file: Option<&str>) -> AppResult<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn parse_indices(raw: &str) -> AppResult<Vec<usize>> {
    let mut out = Vec::new();
    for tok in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let idx: usize = tok
            .parse()
            .map_err(|_| AppError::Other(format!("invalid item index: {tok}")))?;
        if !out.contains(&idx) {
            out.push(idx);
        }
    }
    Ok(out)
}
