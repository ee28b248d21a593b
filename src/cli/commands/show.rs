use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{FixedTimeSource, ServerClock, SystemTimeSource};
use crate::core::disclosure::ToggleOutcome;
use crate::core::session::{ReloadOutcome, Session};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::server::Locale;
use crate::models::task_type::find_task_type;
use crate::source::{CsvScheduleSource, ScheduleSource};
use crate::ui::board::{BoardOptions, render_board};
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::warning;
use crate::utils::time::parse_server_datetime;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { at, expand, json } = cmd {
        let server = cfg.server()?;
        let source = CsvScheduleSource::new(&cfg.schedule);

        let mut session = Session::new(server, cfg.remaining_cutoff_hour);

        let now = match at {
            Some(s) => {
                let pinned = parse_server_datetime(s)?;
                ServerClock::new(FixedTimeSource::at_server_time(server, pinned)).now(server)
            }
            None => ServerClock::new(SystemTimeSource).now(server),
        };

        reload_and_log(&mut session, &source, now, cfg);

        for key in expand {
            if find_task_type(key).is_none() {
                return Err(AppError::InvalidTaskType(key.clone()));
            }
            if session.toggle_group(key) == ToggleOutcome::Inert {
                warning(format!("{}: {}", key, text(session.server().locale(), Msg::ToggleInert)));
            }
        }

        if *json {
            let buckets = session.snapshot().map(|s| s.buckets.clone()).unwrap_or_default();
            println!("{}", serde_json::to_string_pretty(&buckets)?);
        } else {
            print!("{}", render_board(&session, now, &board_options(cfg)));
        }
    }
    Ok(())
}

pub(crate) fn board_options(cfg: &Config) -> BoardOptions {
    BoardOptions {
        separator: cfg.separator_char.clone(),
        color: std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Reload the session; a failed load is written to the internal log and
/// otherwise left to the board, which shows it inline.
pub(crate) fn reload_and_log<S: ScheduleSource>(
    session: &mut Session,
    source: &S,
    now: chrono::NaiveDateTime,
    cfg: &Config,
) -> ReloadOutcome {
    let outcome = session.reload(source, now);
    if let ReloadOutcome::Failed(msg) = &outcome {
        log_reload_failure(cfg, session.server().locale(), msg);
    }
    outcome
}

pub(crate) fn log_reload_failure(cfg: &Config, locale: Locale, msg: &str) {
    let logged = DbPool::open(&cfg.database)
        .and_then(|pool| ttlog(&pool.conn, "reload_failed", &cfg.schedule, msg));
    if let Err(e) = logged {
        warning(format!("{}: {}", text(locale, Msg::LogWriteFailed), e));
    }
}
