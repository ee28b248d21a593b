use crate::models::server::Server;
use clap::{Parser, Subcommand};

/// Command-line interface definition for spawnboard
#[derive(Parser)]
#[command(
    name = "spawnboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Recurring event board in Taiwan/Japan server time, with a local report log",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the schedule table (CSV)
    #[arg(global = true, long = "schedule")]
    pub schedule: Option<String>,

    /// Server whose clock the board follows (default from config, else by local timezone)
    #[arg(global = true, long = "server", value_enum)]
    pub server: Option<Server>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the database and an empty schedule table
    Init,

    /// Manage the configuration file (view, check, or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print today's board once
    Show {
        /// Pin server time instead of reading the clock ("YYYY-MM-DD HH:MM")
        #[arg(long = "at", value_name = "DATETIME")]
        at: Option<String>,

        /// Toggle a group's remaining list (task key, repeatable, applied in order)
        #[arg(long = "expand", value_name = "TASK")]
        expand: Vec<String>,

        /// Print the resolved buckets as JSON instead of the board
        #[arg(long = "json")]
        json: bool,
    },

    /// Live board: clock every second, schedule reload on every server hour.
    /// Keys: s toggles the server, 1-3 expand a group, q quits
    Watch,

    /// File a report
    Report {
        /// Free-text comment, e.g. "10/08 19:26 place place"
        comment: String,

        /// Task key: gishiki, mizuki, shirao, other
        #[arg(long = "task", default_value = "other")]
        task: String,

        /// Report kind: date_report (event tasks only) or other
        #[arg(long = "kind", default_value = "other")]
        kind: String,
    },

    /// List reports (newest first) or clear them
    Reports {
        #[arg(long = "clear", help = "Delete every stored report")]
        clear: bool,

        #[arg(long = "json", conflicts_with = "clear", help = "Print reports as JSON")]
        json: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
