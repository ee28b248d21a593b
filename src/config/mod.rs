use crate::core::disclosure::DEFAULT_CUTOFF_HOUR;
use crate::errors::{AppError, AppResult};
use crate::models::server::Server;
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate;

/// Overrides the config directory (used by tests and portable installs).
pub const HOME_ENV: &str = "SPAWNBOARD_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_schedule")]
    pub schedule: String,
    /// `auto`, `taiwan` or `japan`.
    #[serde(default = "default_server")]
    pub server: String,
    #[serde(default = "default_cutoff_hour")]
    pub remaining_cutoff_hour: u32,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    "spawnboard.sqlite".to_string()
}
fn default_schedule() -> String {
    "timeList.csv".to_string()
}
fn default_server() -> String {
    "auto".to_string()
}
fn default_cutoff_hour() -> u32 {
    DEFAULT_CUTOFF_HOUR
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::config_dir()
                .join(default_database())
                .to_string_lossy()
                .to_string(),
            schedule: Self::config_dir()
                .join(default_schedule())
                .to_string_lossy()
                .to_string(),
            server: default_server(),
            remaining_cutoff_hour: default_cutoff_hour(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(dir) = env::var(HOME_ENV)
            && !dir.is_empty()
        {
            return PathBuf::from(dir);
        }
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("spawnboard")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".spawnboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("spawnboard.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// Relative paths in the file are taken relative to the config dir.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        let dir = Self::config_dir();
        cfg.database = resolve_in(&dir, &cfg.database).to_string_lossy().to_string();
        cfg.schedule = resolve_in(&dir, &cfg.schedule).to_string_lossy().to_string();
        Ok(cfg)
    }

    /// Resolve the `server` setting. `auto` follows the viewer's timezone.
    pub fn server(&self) -> AppResult<Server> {
        if self.server.trim().eq_ignore_ascii_case("auto") {
            let offset = chrono::Local::now().offset().local_minus_utc();
            return Ok(Server::from_local_offset(offset));
        }
        Server::from_name(&self.server).ok_or_else(|| AppError::InvalidServer(self.server.clone()))
    }

    /// Create the config dir and write this configuration unless
    /// `is_test`. Returns the path written.
    pub fn save(&self, is_test: bool) -> AppResult<Option<PathBuf>> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        if is_test {
            return Ok(None);
        }

        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(Some(path))
    }
}
