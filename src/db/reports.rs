//! The report log: append-only list of player reports, newest first.

use crate::errors::AppResult;
use crate::models::report::{NewReport, ReportEntry};
use chrono::{DateTime, Local};
use rusqlite::{Connection, Row, params};

pub fn append(conn: &Connection, report: &NewReport, at: DateTime<Local>) -> AppResult<ReportEntry> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO reports (created_at, task, kind, comment)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![
        at.to_rfc3339(),
        report.task,
        report.kind,
        report.comment
    ])?;

    Ok(ReportEntry {
        id: conn.last_insert_rowid(),
        created_at: at,
        task: report.task.clone(),
        kind: report.kind.clone(),
        comment: report.comment.clone(),
    })
}

/// All reports, newest first. Ties on timestamp fall back to insertion order.
pub fn list(conn: &Connection) -> AppResult<Vec<ReportEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, created_at, task, kind, comment FROM reports
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    // created_at is RFC 3339 with the local offset; re-sort on the parsed
    // instant in case entries were written under different offsets.
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    Ok(out)
}

/// Delete every report. Returns how many were removed.
pub fn clear(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM reports", [])?)
}

fn map_row(row: &Row) -> rusqlite::Result<ReportEntry> {
    let raw: String = row.get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(ReportEntry {
        id: row.get("id")?,
        created_at,
        task: row.get("task")?,
        kind: row.get("kind")?,
        comment: row.get("comment")?,
    })
}
