//! Schedule sources.
//!
//! A source yields the weekly table as a list of [`ScheduleRow`]s. The
//! on-disk format is a flat table keyed by column name:
//!
//! | column          | content                        |
//! |-----------------|--------------------------------|
//! | `Week-zh`       | weekday in zh (`日`…`六`)      |
//! | `Week-jp`       | weekday in ja (`日`…`土`)      |
//! | `{key}-time`    | `HH:MM` for task type `key`    |
//! | `{key}-zh`      | zh label for that entry        |
//! | `{key}-jp`      | ja label for that entry        |
//!
//! One table row carries one entry per task type, so it becomes zero or
//! more `ScheduleRow`s. Missing columns read as empty.

mod csv;

pub use self::csv::CsvScheduleSource;

use crate::core::clock::weekday_from_label;
use crate::errors::AppResult;
use crate::models::schedule::{ScheduleRow, WeekdayMarker};
use crate::models::server::Locale;
use crate::models::task_type::TaskType;
use std::collections::HashMap;

pub const WEEK_ZH_COLUMN: &str = "Week-zh";
pub const WEEK_JA_COLUMN: &str = "Week-jp";

/// One table row, keyed by column header.
pub type TabularRow = HashMap<String, String>;

pub trait ScheduleSource {
    /// Load the full table. Any read or parse failure is
    /// [`AppError::LoadFailed`](crate::errors::AppError::LoadFailed).
    fn load(&self) -> AppResult<Vec<ScheduleRow>>;
}

/// Header row matching the tabular contract, in column order.
pub fn template_headers(task_types: &[TaskType]) -> Vec<String> {
    let mut headers = vec![WEEK_ZH_COLUMN.to_string(), WEEK_JA_COLUMN.to_string()];
    for tt in task_types {
        headers.push(tt.time_column());
        headers.push(tt.label_column(Locale::Zh));
        headers.push(tt.label_column(Locale::Ja));
    }
    headers
}

/// Split table rows into per-task schedule rows. Rows without a time for a
/// task type produce nothing for it; duplicates are kept as they are.
pub fn rows_from_table(table: &[TabularRow], task_types: &[TaskType]) -> Vec<ScheduleRow> {
    let mut out = Vec::new();

    for record in table {
        let weekday = WeekdayMarker {
            zh: weekday_from_label(cell(record, WEEK_ZH_COLUMN), Locale::Zh),
            ja: weekday_from_label(cell(record, WEEK_JA_COLUMN), Locale::Ja),
        };

        for tt in task_types {
            let time = cell(record, &tt.time_column());
            if time.is_empty() {
                continue;
            }
            out.push(ScheduleRow {
                weekday,
                task: tt.key.to_string(),
                time: time.to_string(),
                label_zh: cell(record, &tt.label_column(Locale::Zh)).to_string(),
                label_ja: cell(record, &tt.label_column(Locale::Ja)).to_string(),
            });
        }
    }

    out
}

fn cell<'a>(record: &'a TabularRow, col: &str) -> &'a str {
    record.get(col).map(|v| v.trim()).unwrap_or("")
}
