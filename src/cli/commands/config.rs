use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", ConfigLogic::render(cfg)?);
        }

        // ---- CHECK / MIGRATE ----
        if *check || *run_migrate {
            if !path.exists() {
                warning(format!("No configuration file at {}", path.display()));
                return Ok(());
            }

            if *run_migrate {
                let added = migrate::fill_missing(&path)?;
                if added.is_empty() {
                    info("Configuration is up to date.");
                } else {
                    success(format!("Added missing fields: {}", added.join(", ")));
                }
            } else {
                let missing = migrate::missing_keys(&fs::read_to_string(&path)?)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields: {} (run `config --migrate`)",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            match ConfigLogic::edit(&path, editor) {
                Ok(used) => success(format!(
                    "Configuration file edited successfully using '{}'",
                    used
                )),
                Err(e) => error(format!("Failed to edit configuration file: {}", e)),
            }
        }
    }

    Ok(())
}
