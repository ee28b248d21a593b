use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::source::CsvScheduleSource;
use crate::ui::messages::{success, warning};

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
///  - an empty schedule table with the expected headers, if none exists
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing spawnboard…");

    if let Some(path) = cfg.save(cli.test)? {
        success(format!("Config file : {}", path.display()));
    }

    let pool = DbPool::open(&cfg.database)?;
    success(format!("Database    : {}", &cfg.database));

    let source = CsvScheduleSource::new(&cfg.schedule);
    if source.write_template()? {
        success(format!("Schedule    : {} (empty template)", source.path().display()));
    } else {
        println!("📄 Schedule    : {} (kept)", source.path().display());
    }

    // internal log is best effort
    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "",
        &format!("Initialized with database {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 spawnboard initialization completed!");
    Ok(())
}
