use chrono::{DateTime, Local};
use serde::Serialize;

/// A player report as stored in the `reports` table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub id: i64,
    pub created_at: DateTime<Local>, // ⇔ reports.created_at (TEXT, RFC 3339)
    pub task: String,                // ⇔ reports.task (REPORT_TASKS key)
    pub kind: String,                // ⇔ reports.kind ('date_report' | 'other')
    pub comment: String,
}

/// Input for a new report, before it gets an id and a timestamp.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub task: String,
    pub kind: String,
    pub comment: String,
}
