use chrono::{Duration, Local, TimeZone};
use spawnboard::core::report::ReportLogic;
use spawnboard::db::log::load_log;
use spawnboard::db::pool::DbPool;
use spawnboard::db::reports;
use spawnboard::errors::AppError;
use spawnboard::models::report::{NewReport, ReportEntry};
use spawnboard::models::server::Locale;

fn new_report(task: &str, kind: &str, comment: &str) -> NewReport {
    NewReport {
        task: task.into(),
        kind: kind.into(),
        comment: comment.into(),
    }
}

#[test]
fn test_validate_rejects_blank_comment() {
    for blank in ["", "   ", "\n\t"] {
        let err = ReportLogic::validate("mizuki", "date_report", blank).unwrap_err();
        assert!(matches!(err, AppError::EmptyInput));
    }
}

#[test]
fn test_validate_trims_and_checks_catalog() {
    let r = ReportLogic::validate("gishiki", "date_report", "  10/08 19:26 north  ").expect("valid");
    assert_eq!(r.comment, "10/08 19:26 north");

    assert!(matches!(
        ReportLogic::validate("dragon", "other", "x"),
        Err(AppError::InvalidTaskType(_))
    ));
    // time reports only for scheduled event types
    assert!(matches!(
        ReportLogic::validate("other", "date_report", "x"),
        Err(AppError::InvalidReportKind { .. })
    ));
    assert!(ReportLogic::validate("other", "other", "x").is_ok());
}

#[test]
fn test_list_is_newest_first() {
    let pool = DbPool::in_memory().expect("db");
    let base = Local.with_ymd_and_hms(2026, 10, 15, 19, 0, 0).unwrap();

    reports::append(&pool.conn, &new_report("gishiki", "other", "first"), base).unwrap();
    reports::append(
        &pool.conn,
        &new_report("mizuki", "other", "third"),
        base + Duration::minutes(20),
    )
    .unwrap();
    reports::append(
        &pool.conn,
        &new_report("shirao", "other", "second"),
        base + Duration::minutes(10),
    )
    .unwrap();

    let comments: Vec<String> = reports::list(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|r| r.comment)
        .collect();
    assert_eq!(comments, vec!["third", "second", "first"]);
}

#[test]
fn test_same_timestamp_keeps_insertion_order_reversed() {
    let pool = DbPool::in_memory().expect("db");
    let at = Local.with_ymd_and_hms(2026, 10, 15, 19, 0, 0).unwrap();

    reports::append(&pool.conn, &new_report("other", "other", "a"), at).unwrap();
    reports::append(&pool.conn, &new_report("other", "other", "b"), at).unwrap();

    let list = reports::list(&pool.conn).unwrap();
    assert_eq!(list[0].comment, "b");
    assert_eq!(list[1].comment, "a");
}

#[test]
fn test_submit_and_clear_write_internal_log() {
    let mut pool = DbPool::in_memory().expect("db");

    let entry = ReportLogic::submit(&mut pool, "mizuki", "date_report", "19:26 lake").expect("submit");
    assert_eq!(entry.comment, "19:26 lake");
    assert_eq!(ReportLogic::list(&mut pool).unwrap().len(), 1);

    assert_eq!(ReportLogic::clear(&mut pool).unwrap(), 1);
    assert!(ReportLogic::list(&mut pool).unwrap().is_empty());

    let ops: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|l| l.operation)
        .collect();
    assert!(ops.contains(&"report".to_string()));
    assert!(ops.contains(&"clear".to_string()));
    assert!(ops.contains(&"migration_applied".to_string()));
}

#[test]
fn test_format_line_is_localized() {
    let entry = ReportEntry {
        id: 1,
        created_at: Local.with_ymd_and_hms(2026, 10, 8, 19, 26, 0).unwrap(),
        task: "mizuki".into(),
        kind: "date_report".into(),
        comment: "north gate".into(),
    };

    assert_eq!(
        ReportLogic::format_line(&entry, Locale::Zh),
        "[2026-10-08 19:26] 水月野王 時間回報⇒north gate"
    );
    assert_eq!(
        ReportLogic::format_line(&entry, Locale::Ja),
        "[2026-10-08 19:26] 水月FB 時間報告⇒north gate"
    );
}

#[test]
fn test_migrations_are_not_reapplied() {
    let pool = DbPool::in_memory().expect("db");
    let again = spawnboard::db::migrate::run_pending_migrations(&pool.conn).unwrap();
    assert!(again.is_empty());
}
