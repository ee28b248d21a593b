//! Schedule rows as loaded from the source, and the per-task buckets the
//! resolver produces from them.

use crate::models::server::Locale;
use chrono::{NaiveTime, Timelike};
use serde::Serialize;

/// Weekday of a row, 0 = Sunday.
///
/// Sources historically wrote the weekday twice, once per locale, and either
/// column may be the populated one. Both are kept so a row matches a day if
/// either marker names it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeekdayMarker {
    pub zh: Option<u32>,
    pub ja: Option<u32>,
}

impl WeekdayMarker {
    pub fn matches(&self, weekday: u32) -> bool {
        self.zh == Some(weekday) || self.ja == Some(weekday)
    }
}

/// One recurring entry for one task type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub weekday: WeekdayMarker,
    pub task: String,
    /// Time of day exactly as written in the source (usually `HH:MM`).
    pub time: String,
    pub label_zh: String,
    pub label_ja: String,
}

impl ScheduleRow {
    pub fn label(&self, locale: Locale) -> &str {
        match locale {
            Locale::Zh => &self.label_zh,
            Locale::Ja => &self.label_ja,
        }
    }
}

/// A row that survived filtering, with its parsed time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub at: NaiveTime,
    pub row: ScheduleRow,
}

impl ResolvedEntry {
    pub fn hour(&self) -> u32 {
        self.at.hour()
    }

    pub fn minute_of_day(&self) -> u32 {
        self.at.hour() * 60 + self.at.minute()
    }

    pub fn time_label(&self) -> String {
        self.at.format("%H:%M").to_string()
    }
}

/// Today's rows for one task type, split relative to the resolution hour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedBucket {
    /// First row (by time) in the current hour.
    pub current: Option<ResolvedEntry>,
    /// Further rows in the current hour, after `current`.
    pub concurrent: Vec<ResolvedEntry>,
    /// Rows in the next two hours.
    pub upcoming: Vec<ResolvedEntry>,
    /// Rows later than `upcoming`.
    pub remaining: Vec<ResolvedEntry>,
    pub is_stale: bool,
}

impl ResolvedBucket {
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
            && self.concurrent.is_empty()
            && self.upcoming.is_empty()
            && self.remaining.is_empty()
    }

    /// Every classified entry, in bucket order.
    pub fn entries(&self) -> impl Iterator<Item = &ResolvedEntry> {
        self.current
            .iter()
            .chain(self.concurrent.iter())
            .chain(self.upcoming.iter())
            .chain(self.remaining.iter())
    }
}
