//! Time utilities: parsing HH:MM, server-time formatting, hour boundaries.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// Parse a time of day as found in schedule tables: `HH:MM`, `H:MM`, or
/// `HH:MM:SS` (spreadsheet exports sometimes carry seconds).
pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    let trimmed = t.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| AppError::UnparseableTime(t.to_string()))
}

/// Parse the `--at` override, interpreted as server-local civil time.
pub fn parse_server_datetime(s: &str) -> AppResult<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::InvalidDateTime(s.to_string()))
}

/// Milliseconds from `now` to the next wall-clock hour boundary.
/// Exactly on the hour this is a full hour, never zero.
pub fn millis_until_next_hour(now: NaiveDateTime) -> u64 {
    let elapsed_ms = u64::from(now.minute()) * 60_000
        + u64::from(now.second()) * 1_000
        + u64::from(now.nanosecond() / 1_000_000).min(999);
    3_600_000 - elapsed_ms
}

pub fn format_clock(now: NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}
