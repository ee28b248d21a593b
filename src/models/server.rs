use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Presentation language. Also selects which weekday label table is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Zh,
    Ja,
}

/// The game server whose clock the board is pinned to.
///
/// Each server is a fixed UTC offset in whole hours. There is no DST and no
/// timezone database behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Server {
    /// UTC+8, zh labels.
    Taiwan,
    /// UTC+9, ja labels.
    Japan,
}

impl Server {
    pub fn utc_offset_hours(&self) -> i32 {
        match self {
            Server::Taiwan => 8,
            Server::Japan => 9,
        }
    }

    pub fn locale(&self) -> Locale {
        match self {
            Server::Taiwan => Locale::Zh,
            Server::Japan => Locale::Ja,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Server::Taiwan => Server::Japan,
            Server::Japan => Server::Taiwan,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Server::Taiwan => "taiwan",
            Server::Japan => "japan",
        }
    }

    /// Accepts the long name or the short aliases used in config files.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "taiwan" | "tw" | "zh" => Some(Server::Taiwan),
            "japan" | "jp" | "ja" => Some(Server::Japan),
            _ => None,
        }
    }

    /// Default server for a viewer whose local clock sits at
    /// `local_offset_secs` east of UTC: Japan for UTC+9, Taiwan otherwise.
    pub fn from_local_offset(local_offset_secs: i32) -> Self {
        if local_offset_secs == 9 * 3600 {
            Server::Japan
        } else {
            Server::Taiwan
        }
    }
}
