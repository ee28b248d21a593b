//! Live board. Redraws every second, reloads on the server hour, and
//! reacts to keys between ticks.

use super::show::{board_options, log_reload_failure, reload_and_log};
use crate::config::Config;
use crate::core::clock::{ServerClock, SystemTimeSource, TimeSource};
use crate::core::disclosure::ToggleOutcome;
use crate::core::session::{ReloadOutcome, Session};
use crate::core::ticker::{Tick, Ticker};
use crate::errors::AppResult;
use crate::source::{CsvScheduleSource, ScheduleSource};
use crate::ui::board::{BoardOptions, render_board};
use crate::ui::i18n::{Msg, text};
use crate::utils::colors::{CLEAR_SCREEN, grey};
use crate::utils::time::millis_until_next_hour;
use chrono::NaiveDateTime;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, Write};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchAction {
    Quit,
    ToggleServer,
    /// Disclosure toggle for the n-th task type, zero based.
    ToggleGroup(usize),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Applied {
    Quit,
    Reloaded(ReloadOutcome),
    Toggled(ToggleOutcome),
}

pub fn action_for(key: KeyEvent) -> Option<WatchAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(WatchAction::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(WatchAction::Quit),
        KeyCode::Char('s') | KeyCode::Tab => Some(WatchAction::ToggleServer),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|n| WatchAction::ToggleGroup(n as usize - 1)),
        _ => None,
    }
}

pub fn apply<S, T>(session: &mut Session, source: &S, clock: &ServerClock<T>, action: WatchAction) -> Applied
where
    S: ScheduleSource + ?Sized,
    T: TimeSource,
{
    match action {
        WatchAction::Quit => Applied::Quit,
        WatchAction::ToggleServer => Applied::Reloaded(session.toggle_server(source, clock)),
        WatchAction::ToggleGroup(index) => match session.task_types().get(index) {
            Some(tt) => Applied::Toggled(session.toggle_group(tt.key)),
            None => Applied::Toggled(ToggleOutcome::Inert),
        },
    }
}

/// Board plus key hints. Raw mode does not translate `\n`, so lines end in `\r\n`.
pub fn render_frame(session: &Session, now: NaiveDateTime, opts: &BoardOptions) -> String {
    let footer = text(session.server().locale(), Msg::WatchFooter);
    let footer = if opts.color { grey(footer) } else { footer.to_string() };
    format!("{}{}\n", render_board(session, now, opts), footer).replace('\n', "\r\n")
}

/// Raw mode for the lifetime of the value.
struct RawMode;

impl RawMode {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        terminal::disable_raw_mode().ok();
    }
}

/// Runs until `q`, Esc or Ctrl+C.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let server = cfg.server()?;
    let clock = ServerClock::new(SystemTimeSource);
    let source = CsvScheduleSource::new(&cfg.schedule);
    let opts = board_options(cfg);

    let mut session = Session::new(server, cfg.remaining_cutoff_hour);
    let start = clock.now(server);
    reload_and_log(&mut session, &source, start, cfg);

    let until_hour = Duration::from_millis(millis_until_next_hour(start));
    let mut ticker = Ticker::new(Instant::now(), until_hour);

    let _raw = RawMode::enter()?;
    let mut stdout = io::stdout();
    loop {
        let now = clock.now(session.server());
        write!(stdout, "{CLEAR_SCREEN}{}", render_frame(&session, now, &opts))?;
        stdout.flush()?;

        let (due, tick) = ticker.next_due();
        let wait = due.saturating_duration_since(Instant::now());

        // a key redraws at once; deadlines stay where they are
        if event::poll(wait)? {
            if let Event::Key(key) = event::read()?
                && let Some(action) = action_for(key)
            {
                match apply(&mut session, &source, &clock, action) {
                    Applied::Quit => return Ok(()),
                    Applied::Reloaded(ReloadOutcome::Failed(msg)) => {
                        log_reload_failure(cfg, session.server().locale(), &msg);
                    }
                    _ => {}
                }
            }
            continue;
        }

        ticker.fire(tick);
        match tick {
            Tick::Display => ticker.catch_up(Instant::now()),
            Tick::Reload => {
                let now = clock.now(session.server());
                reload_and_log(&mut session, &source, now, cfg);
            }
        }
    }
}
