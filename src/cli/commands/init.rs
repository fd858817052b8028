use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database with the event log, tasks and settings tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let path = Config::config_file();
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    println!("⚙️  Initializing fwlogger…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &cfg.database);

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    println!("✅ Database initialized at {}", &cfg.database);
    Ok(())
}
