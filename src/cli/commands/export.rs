use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_events;
use crate::errors::AppResult;
use crate::export::export_events;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let events = load_all_events(&pool.conn)?;
        export_events(format, file, &events, *force)?;
        messages::success(format!(
            "{} export completed: {} ({} event(s))",
            format.as_str(),
            file,
            events.len()
        ));
    }
    Ok(())
}
