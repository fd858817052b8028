use crate::config::Config;
use crate::core::remind::run_reminder;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `remind` command (non-interactive reminder mode).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    run_reminder(&pool.conn)
}
