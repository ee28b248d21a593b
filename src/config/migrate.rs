//! Config file upgrades: detect keys missing from an older file and fill
//! them with defaults, keeping every value the user already set.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

pub const EXPECTED_KEYS: [&str; 5] = [
    "database",
    "schedule",
    "server",
    "remaining_cutoff_hour",
    "separator_char",
];

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    let value: Value = serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
    match value {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config("configuration is not a YAML mapping".into())),
    }
}

/// Keys the file does not define.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let map = parse_mapping(content)?;
    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add missing keys with their default values. Returns the keys added;
/// the file is only rewritten when that list is non-empty.
pub fn fill_missing(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let missing = missing_keys(&content)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let mut map = parse_mapping(&content)?;
    let defaults = match serde_yaml::to_value(Config::default()) {
        Ok(Value::Mapping(m)) => m,
        Ok(_) => return Err(AppError::Config("default configuration is not a mapping".into())),
        Err(e) => return Err(AppError::Config(e.to_string())),
    };

    for key in &missing {
        let k = Value::String((*key).to_string());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(map)).map_err(|e| AppError::Config(e.to_string()))?;
    fs::write(path, yaml)?;
    Ok(missing)
}
