use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::reports;
use crate::errors::{AppError, AppResult};
use crate::models::report::{NewReport, ReportEntry};
use crate::models::server::Locale;
use crate::models::task_type::find_report_task;
use chrono::Local;

pub struct ReportLogic;

impl ReportLogic {
    /// Check a report before it is stored: known task, a kind allowed for
    /// that task, and a non-blank comment (trimmed).
    pub fn validate(task: &str, kind: &str, comment: &str) -> AppResult<NewReport> {
        let rt = find_report_task(task).ok_or_else(|| AppError::InvalidTaskType(task.to_string()))?;
        if rt.find_kind(kind).is_none() {
            return Err(AppError::InvalidReportKind {
                task: task.to_string(),
                kind: kind.to_string(),
            });
        }

        let comment = comment.trim();
        if comment.is_empty() {
            return Err(AppError::EmptyInput);
        }

        Ok(NewReport {
            task: rt.key.to_string(),
            kind: kind.to_string(),
            comment: comment.to_string(),
        })
    }

    pub fn submit(pool: &mut DbPool, task: &str, kind: &str, comment: &str) -> AppResult<ReportEntry> {
        let report = Self::validate(task, kind, comment)?;
        let entry = reports::append(&pool.conn, &report, Local::now())?;

        if let Err(e) = ttlog(
            &pool.conn,
            "report",
            &entry.task,
            &format!("Report #{} ({})", entry.id, entry.kind),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(entry)
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<ReportEntry>> {
        reports::list(&pool.conn)
    }

    pub fn clear(pool: &mut DbPool) -> AppResult<usize> {
        let removed = reports::clear(&pool.conn)?;
        if let Err(e) = ttlog(
            &pool.conn,
            "clear",
            "reports",
            &format!("Removed {removed} report(s)"),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
        Ok(removed)
    }

    /// `[2026-10-15 19:26] 水月野王 時間回報⇒comment`
    pub fn format_line(entry: &ReportEntry, locale: Locale) -> String {
        let task = find_report_task(&entry.task);
        let task_label = task.map(|t| t.label(locale)).unwrap_or(entry.task.as_str());
        let kind_label = task
            .and_then(|t| t.find_kind(&entry.kind))
            .map(|k| k.label(locale))
            .unwrap_or(entry.kind.as_str());

        format!(
            "[{}] {} {}⇒{}",
            entry.created_at.format("%Y-%m-%d %H:%M"),
            task_label,
            kind_label,
            entry.comment
        )
    }
}
