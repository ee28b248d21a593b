//! Unified application error type.
//! Every module (db, core, source, cli) returns AppError so that the
//! command layer can decide which failures are recovered and which end
//! the process.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Schedule source
    // ---------------------------
    /// Reading or parsing the schedule table failed. Recovered by the
    /// session, which keeps the previous snapshot on screen.
    #[error("Schedule load failed: {0}")]
    LoadFailed(String),

    /// A row carried a time-of-day that is not HH:MM. The resolver drops
    /// such rows instead of failing the load.
    #[error("Unparseable time of day: {0}")]
    UnparseableTime(String),

    // ---------------------------
    // Parsing errors (CLI input)
    // ---------------------------
    #[error("Invalid date/time: {0} (expected YYYY-MM-DD HH:MM)")]
    InvalidDateTime(String),

    #[error("Unknown server: {0} (expected taiwan or japan)")]
    InvalidServer(String),

    #[error("Unknown task type: {0}")]
    InvalidTaskType(String),

    #[error("Report kind '{kind}' is not allowed for task '{task}'")]
    InvalidReportKind { task: String, kind: String },

    // ---------------------------
    // Reports
    // ---------------------------
    /// Blank report comment. The message shown to the user is localized
    /// by the caller; this text is only the fallback.
    #[error("Report comment is empty")]
    EmptyInput,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
