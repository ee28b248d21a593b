//! Schedule resolution.
//!
//! Takes the week's rows and "now" in server time and classifies, per task
//! type, today's rows into current / upcoming / remaining at hour
//! granularity. Pure: the same inputs always give the same mapping.

use crate::core::clock::weekday_index;
use crate::models::schedule::{ResolvedBucket, ResolvedEntry, ScheduleRow};
use crate::models::task_type::TaskType;
use crate::utils::time::parse_time;
use chrono::{Duration, NaiveDateTime, Timelike};
use std::collections::BTreeMap;

/// Hours after the current one that count as "upcoming".
pub const UPCOMING_HOURS: u32 = 2;

pub fn resolve(
    rows: &[ScheduleRow],
    now: NaiveDateTime,
    task_types: &[TaskType],
) -> BTreeMap<String, ResolvedBucket> {
    task_types
        .iter()
        .map(|tt| (tt.key.to_string(), resolve_task(rows, now, tt)))
        .collect()
}

pub fn resolve_task(rows: &[ScheduleRow], now: NaiveDateTime, task_type: &TaskType) -> ResolvedBucket {
    let today = weekday_index(now);
    let hour = now.hour();

    // -----------------------------
    // Today's rows with a usable time
    // -----------------------------
    let mut entries: Vec<ResolvedEntry> = rows
        .iter()
        .filter(|r| r.task == task_type.key && r.weekday.matches(today))
        .filter(|r| !r.time.trim().is_empty())
        .filter_map(|r| {
            // unparseable times are dropped
            parse_time(&r.time).ok().map(|at| ResolvedEntry {
                at,
                row: r.clone(),
            })
        })
        .collect();

    // Stable: same-minute rows keep source order.
    entries.sort_by_key(ResolvedEntry::minute_of_day);

    let mut bucket = ResolvedBucket::default();

    // -----------------------------
    // Classify by hour. No wraparound past 23: near midnight the later
    // buckets are simply empty.
    // -----------------------------
    for entry in entries {
        let h = entry.hour();
        if h == hour {
            if bucket.current.is_none() {
                bucket.current = Some(entry);
            } else {
                bucket.concurrent.push(entry);
            }
        } else if h > hour && h <= hour + UPCOMING_HOURS {
            bucket.upcoming.push(entry);
        } else if h > hour + UPCOMING_HOURS {
            bucket.remaining.push(entry);
        }
        // earlier hours today are not shown
    }

    bucket.is_stale = bucket
        .current
        .as_ref()
        .is_some_and(|c| is_stale(c, now, task_type.offset_minutes));

    bucket
}

/// True once more than `offset_minutes` have passed since the entry's time
/// today. Exactly at the threshold the entry is still live.
pub fn is_stale(entry: &ResolvedEntry, now: NaiveDateTime, offset_minutes: i64) -> bool {
    let event_at = now.date().and_time(entry.at);
    now > event_at + Duration::minutes(offset_minutes)
}
