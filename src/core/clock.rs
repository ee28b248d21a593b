//! Server time.
//!
//! The board never looks at the viewer's timezone: true UTC is taken from a
//! [`TimeSource`] and the server's fixed offset is added on top.

use crate::models::server::{Locale, Server};
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Utc};

const WEEKDAYS_ZH: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];
const WEEKDAYS_JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Where "now" comes from.
pub trait TimeSource {
    fn utc_now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub DateTime<Utc>);

impl FixedTimeSource {
    /// Pin the clock so that `server` reads `server_time`.
    pub fn at_server_time(server: Server, server_time: NaiveDateTime) -> Self {
        let utc = server_time - Duration::hours(i64::from(server.utc_offset_hours()));
        Self(utc.and_utc())
    }
}

impl TimeSource for FixedTimeSource {
    fn utc_now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub struct ServerClock<T: TimeSource> {
    source: T,
}

impl<T: TimeSource> ServerClock<T> {
    pub fn new(source: T) -> Self {
        Self { source }
    }

    /// Current civil time on `server`.
    pub fn now(&self, server: Server) -> NaiveDateTime {
        to_server_time(self.source.utc_now(), server)
    }

    pub fn weekday_label(&self, server: Server, locale: Locale) -> &'static str {
        weekday_label(weekday_index(self.now(server)), locale)
    }
}

pub fn to_server_time(utc: DateTime<Utc>, server: Server) -> NaiveDateTime {
    utc.naive_utc() + Duration::hours(i64::from(server.utc_offset_hours()))
}

/// Weekday of `now`, 0 = Sunday. Both label tables are indexed by this.
pub fn weekday_index(now: NaiveDateTime) -> u32 {
    now.weekday().num_days_from_sunday()
}

pub fn weekday_label(index: u32, locale: Locale) -> &'static str {
    let table = match locale {
        Locale::Zh => &WEEKDAYS_ZH,
        Locale::Ja => &WEEKDAYS_JA,
    };
    table[(index % 7) as usize]
}

/// Reverse lookup used when reading weekday markers from a schedule table.
pub fn weekday_from_label(label: &str, locale: Locale) -> Option<u32> {
    let table = match locale {
        Locale::Zh => &WEEKDAYS_ZH,
        Locale::Ja => &WEEKDAYS_JA,
    };
    let label = label.trim();
    table.iter().position(|w| *w == label).map(|i| i as u32)
}

/// `2026/10/15（木）`
pub fn date_label(now: NaiveDateTime, locale: Locale) -> String {
    format!(
        "{}/{}/{}（{}）",
        now.year(),
        now.month(),
        now.day(),
        weekday_label(weekday_index(now), locale)
    )
}
