use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{get_settings, update_settings};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `config` subcommand: set the reminder hour and/or print the
/// configuration file and the stored watch settings.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        remind_hour,
    } = cmd
    {
        if remind_hour.is_none() && !print_config {
            return Ok(());
        }
        let pool = DbPool::new(&cfg.database)?;

        if let Some(hour) = remind_hour {
            if *hour > 23 {
                return Err(AppError::Config(format!(
                    "remind hour must be between 0 and 23, got {hour}"
                )));
            }
            let mut settings = get_settings(&pool.conn)?;
            settings.remind_hour = *hour;
            update_settings(&pool.conn, &settings)?;
            messages::success(format!("remind hour set to {hour}:00"));
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            println!(
                "{}",
                serde_yaml::to_string(&cfg).map_err(|_| AppError::ConfigLoad)?
            );

            let settings = get_settings(&pool.conn)?;
            println!("🗄️  Stored settings:\n");
            println!("watch_dirs:  {}", settings.dirs_str());
            println!("extensions:  {}", settings.extensions_str());
            println!("remind_hour: {}", settings.remind_hour);
        }
    }
    Ok(())
}
