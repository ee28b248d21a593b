//! Schema migrations.
//!
//! Applied migrations are recorded in the `log` table as
//! `operation = 'migration_applied'` with the migration id as target, so the
//! `log` table itself is the only thing created unconditionally.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    id: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        id: "20250901_0001_create_reports",
        description: "Created reports table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS reports (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at  TEXT NOT NULL,
            task        TEXT NOT NULL,
            kind        TEXT NOT NULL,
            comment     TEXT NOT NULL
        );
        "#,
    },
    Migration {
        id: "20251012_0002_reports_created_at_index",
        description: "Indexed reports by created_at",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_reports_created_at ON reports(created_at);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, id: &str) -> AppResult<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([id], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {e}", m.id)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.id, m.description],
    )?;
    Ok(())
}

/// Run every migration not yet recorded in `log`. Returns the ids applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.id)? {
            apply(conn, m)?;
            applied.push(m.id);
        }
    }
    Ok(applied)
}
