use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::get_due_tasks;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Handle the `tasks` command: list pending tasks due on a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tasks { due } = cmd {
        let due_date = match due {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let pool = DbPool::new(&cfg.database)?;
        let tasks = get_due_tasks(&pool.conn, due_date)?;

        if tasks.is_empty() {
            println!("No pending tasks due {due_date}");
            return Ok(());
        }

        println!("Pending tasks due {due_date}:");
        for task in &tasks {
            println!("{:>4} | {}", task.id, task.task_text);
        }
    }
    Ok(())
}
