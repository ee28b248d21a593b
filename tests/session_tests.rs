use chrono::Timelike;
use spawnboard::core::clock::{FixedTimeSource, ServerClock};
use spawnboard::core::disclosure::{DEFAULT_CUTOFF_HOUR, Disclosure, GroupState, ToggleOutcome};
use spawnboard::core::session::{ReloadOutcome, Session};
use spawnboard::errors::{AppError, AppResult};
use spawnboard::models::schedule::ScheduleRow;
use spawnboard::models::server::Server;
use spawnboard::source::ScheduleSource;
use spawnboard::ui::board::{BoardOptions, render_board};
use spawnboard::utils::colors::{BOLD, DIM};
use std::cell::{Cell, RefCell};

mod common;
use common::{at, row};

/// In-memory source whose next result can be swapped between loads.
struct ScriptedSource {
    rows: RefCell<AppResult<Vec<ScheduleRow>>>,
    loads: Cell<usize>,
}

impl ScriptedSource {
    fn ok(rows: Vec<ScheduleRow>) -> Self {
        Self {
            rows: RefCell::new(Ok(rows)),
            loads: Cell::new(0),
        }
    }

    fn fail_next(&self) {
        *self.rows.borrow_mut() = Err(AppError::LoadFailed("network down".into()));
    }
}

impl ScheduleSource for ScriptedSource {
    fn load(&self) -> AppResult<Vec<ScheduleRow>> {
        self.loads.set(self.loads.get() + 1);
        match &*self.rows.borrow() {
            Ok(rows) => Ok(rows.clone()),
            Err(e) => Err(AppError::LoadFailed(e.to_string())),
        }
    }
}

fn week() -> Vec<ScheduleRow> {
    vec![
        row(4, "gishiki", "14:00"),
        row(4, "gishiki", "15:00"),
        row(4, "gishiki", "18:00"),
        row(4, "gishiki", "22:00"),
        row(4, "mizuki", "19:30"),
        row(4, "mizuki", "23:00"),
    ]
}

fn plain() -> BoardOptions {
    BoardOptions {
        separator: "-".into(),
        color: false,
    }
}

// ---------------------------
// Disclosure state machine
// ---------------------------

#[test]
fn test_toggle_before_cutoff_expands() {
    let mut d = Disclosure::new(["gishiki", "mizuki"], DEFAULT_CUTOFF_HOUR);
    assert_eq!(d.state("gishiki"), GroupState::Collapsed);

    assert_eq!(d.toggle("gishiki", 20, true), ToggleOutcome::Expanded);
    assert!(d.is_expanded("gishiki"));

    // repeated toggle collapses
    assert_eq!(d.toggle("gishiki", 20, true), ToggleOutcome::Collapsed);
    assert_eq!(d.expanded(), None);
}

#[test]
fn test_toggle_at_cutoff_is_inert() {
    let mut d = Disclosure::new(["gishiki"], DEFAULT_CUTOFF_HOUR);
    assert!(d.toggle_enabled(20));
    assert!(!d.toggle_enabled(21));

    assert_eq!(d.toggle("gishiki", 21, true), ToggleOutcome::Inert);
    assert_eq!(d.toggle("gishiki", 23, true), ToggleOutcome::Inert);
    assert!(!d.is_expanded("gishiki"));
}

#[test]
fn test_only_one_group_expanded() {
    let mut d = Disclosure::new(["gishiki", "mizuki", "shirao"], DEFAULT_CUTOFF_HOUR);

    d.toggle("gishiki", 10, true);
    assert_eq!(d.toggle("mizuki", 10, true), ToggleOutcome::Expanded);
    assert_eq!(d.expanded(), Some("mizuki"));
    assert!(!d.is_expanded("gishiki"));
}

#[test]
fn test_toggle_without_remaining_collapses_others() {
    let mut d = Disclosure::new(["gishiki", "mizuki"], DEFAULT_CUTOFF_HOUR);
    d.toggle("gishiki", 10, true);

    assert_eq!(d.toggle("mizuki", 10, false), ToggleOutcome::Inert);
    assert_eq!(d.expanded(), None);
}

#[test]
fn test_unknown_group_and_reset() {
    let mut d = Disclosure::new(["gishiki"], 18);
    assert_eq!(d.toggle("nope", 10, true), ToggleOutcome::Inert);
    assert_eq!(d.cutoff_hour(), 18);

    d.toggle("gishiki", 10, true);
    d.reset();
    assert_eq!(d.expanded(), None);
}

// ---------------------------
// Session
// ---------------------------

#[test]
fn test_reload_builds_snapshot() {
    let source = ScriptedSource::ok(week());
    let mut session = Session::new(Server::Taiwan, DEFAULT_CUTOFF_HOUR);
    assert!(session.snapshot().is_none());

    assert_eq!(session.reload(&source, at("2026-10-15 14:30")), ReloadOutcome::Updated);

    let snap = session.snapshot().expect("snapshot");
    assert_eq!(snap.resolved_at, at("2026-10-15 14:30"));
    let g = snap.bucket("gishiki").expect("gishiki bucket");
    assert_eq!(g.current.as_ref().map(|c| c.time_label()), Some("14:00".into()));
    assert!(!session.load_failed());
}

#[test]
fn test_failed_reload_keeps_previous_snapshot() {
    let source = ScriptedSource::ok(week());
    let mut session = Session::new(Server::Taiwan, DEFAULT_CUTOFF_HOUR);
    session.reload(&source, at("2026-10-15 14:30"));
    let before = session.snapshot().expect("snapshot");

    source.fail_next();
    let outcome = session.reload(&source, at("2026-10-15 15:00"));

    assert!(matches!(outcome, ReloadOutcome::Failed(ref m) if m.contains("network down")));
    assert!(session.load_failed());
    let after = session.snapshot().expect("still there");
    assert_eq!(*after, *before);
    assert_eq!(after.resolved_at.hour(), 14);
}

#[test]
fn test_first_load_failure_has_no_snapshot() {
    let source = ScriptedSource::ok(Vec::new());
    source.fail_next();
    let mut session = Session::new(Server::Japan, DEFAULT_CUTOFF_HOUR);

    session.reload(&source, at("2026-10-15 14:30"));
    assert!(session.snapshot().is_none());

    let board = render_board(&session, at("2026-10-15 14:30"), &plain());
    assert!(board.contains("時間表の読み込みに失敗しました"));
}

#[test]
fn test_reload_resets_disclosure() {
    let source = ScriptedSource::ok(week());
    let mut session = Session::new(Server::Taiwan, DEFAULT_CUTOFF_HOUR);
    session.reload(&source, at("2026-10-15 14:30"));

    assert_eq!(session.toggle_group("gishiki"), ToggleOutcome::Expanded);
    session.reload(&source, at("2026-10-15 15:00"));
    assert_eq!(session.disclosure().expanded(), None);
}

#[test]
fn test_toggle_group_uses_resolved_hour() {
    let source = ScriptedSource::ok(week());
    let mut session = Session::new(Server::Taiwan, DEFAULT_CUTOFF_HOUR);

    // no snapshot yet
    assert_eq!(session.toggle_group("gishiki"), ToggleOutcome::Inert);

    session.reload(&source, at("2026-10-15 20:10"));
    // gishiki 22:00 is in upcoming (20+2), nothing remaining
    assert_eq!(session.toggle_group("gishiki"), ToggleOutcome::Inert);

    session.reload(&source, at("2026-10-15 14:10"));
    assert_eq!(session.toggle_group("mizuki"), ToggleOutcome::Expanded);

    session.reload(&source, at("2026-10-15 21:00"));
    assert_eq!(session.toggle_group("mizuki"), ToggleOutcome::Inert);
}

#[test]
fn test_toggle_server_switches_then_reloads() {
    let source = ScriptedSource::ok(week());
    let mut session = Session::new(Server::Taiwan, DEFAULT_CUTOFF_HOUR);
    let clock = ServerClock::new(FixedTimeSource::at_server_time(
        Server::Taiwan,
        at("2026-10-15 14:30"),
    ));

    session.reload(&source, clock.now(session.server()));
    session.toggle_group("gishiki");

    let outcome = session.toggle_server(&source, &clock);

    assert_eq!(outcome, ReloadOutcome::Updated);
    assert_eq!(session.server(), Server::Japan);
    assert_eq!(source.loads.get(), 2);
    // re-resolved in Japan time, one hour ahead
    let snap = session.snapshot().expect("snapshot");
    assert_eq!(snap.resolved_at, at("2026-10-15 15:30"));
    assert_eq!(session.disclosure().expanded(), None);
}

#[test]
fn test_toggle_server_relabels_even_if_reload_fails() {
    let source = ScriptedSource::ok(week());
    let mut session = Session::new(Server::Taiwan, DEFAULT_CUTOFF_HOUR);
    let clock = ServerClock::new(FixedTimeSource::at_server_time(
        Server::Taiwan,
        at("2026-10-15 14:30"),
    ));
    session.reload(&source, clock.now(session.server()));

    source.fail_next();
    session.toggle_server(&source, &clock);

    assert_eq!(session.server(), Server::Japan);
    let board = render_board(&session, clock.now(Server::Japan), &plain());
    assert!(board.contains("日本時間"));
    assert!(board.contains("前回のデータを表示中"));
    assert!(board.contains("gishiki 14:00 ja"));
}

// ---------------------------
// Board rendering
// ---------------------------

#[test]
fn test_board_shows_buckets_and_placeholders() {
    let source = ScriptedSource::ok(week());
    let mut session = Session::new(Server::Taiwan, DEFAULT_CUTOFF_HOUR);
    session.reload(&source, at("2026-10-15 14:30"));

    let board = render_board(&session, at("2026-10-15 14:30"), &plain());

    assert!(board.contains("2026/10/15（四）"));
    assert!(board.contains("台灣時間 14:30:00"));
    assert!(board.contains("gishiki 14:00 zh"));
    assert!(board.contains("gishiki 15:00 zh"));
    // remaining is collapsed
    assert!(!board.contains("gishiki 18:00 zh"));
    assert!(board.contains("其他時間 ▼"));
    // shirao has nothing today
    assert!(board.contains("--:--"));
    assert!(board.contains("今日無排程"));
    assert!(board.contains("出字提示"));
}

#[test]
fn test_board_expanded_group_and_cutoff() {
    let source = ScriptedSource::ok(week());
    let mut session = Session::new(Server::Taiwan, DEFAULT_CUTOFF_HOUR);
    session.reload(&source, at("2026-10-15 14:30"));
    session.toggle_group("gishiki");

    let board = render_board(&session, at("2026-10-15 14:30"), &plain());
    assert!(board.contains("gishiki 18:00 zh"));
    assert!(board.contains("gishiki 22:00 zh"));
    assert!(board.contains("關閉 ▲"));

    session.reload(&source, at("2026-10-15 21:05"));
    let board = render_board(&session, at("2026-10-15 21:05"), &plain());
    assert!(!board.contains("其他時間"));
}

#[test]
fn test_board_styles_same_hour_rows_by_their_own_time() {
    let source = ScriptedSource::ok(vec![row(4, "gishiki", "14:05"), row(4, "gishiki", "14:40")]);
    let mut session = Session::new(Server::Taiwan, DEFAULT_CUTOFF_HOUR);
    session.reload(&source, at("2026-10-15 14:20"));

    let opts = BoardOptions {
        separator: "-".into(),
        color: true,
    };
    let board = render_board(&session, at("2026-10-15 14:20"), &opts);
    let line_of = |needle: &str| {
        board
            .lines()
            .find(|l| l.contains(needle))
            .unwrap_or_else(|| panic!("no line for {needle}:\n{board}"))
            .to_string()
    };

    // 14:05 + 10 min is past: dimmed
    let first = line_of("gishiki 14:05 zh");
    assert!(first.contains(DIM));
    // 14:40 has not happened yet: bold, not dimmed
    let second = line_of("gishiki 14:40 zh");
    assert!(second.contains(BOLD));
    assert!(!second.contains(DIM));
}
