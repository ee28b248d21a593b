//! Terminal rendering of a session: clock line, one group per task type,
//! disclosure control, legend.

use crate::core::clock::date_label;
use crate::core::resolver::is_stale;
use crate::core::session::Session;
use crate::models::schedule::{ResolvedBucket, ResolvedEntry};
use crate::models::server::Locale;
use crate::models::task_type::TaskType;
use crate::ui::i18n::{Msg, PLACEHOLDER_CONTENT, PLACEHOLDER_TIME, legend, text};
use crate::utils::colors::{self, RESET};
use crate::utils::table::{Column, Table, strip_ansi};
use crate::utils::time::format_clock;
use chrono::{NaiveDateTime, Timelike};

const TYPE_WIDTH: usize = 12;
const TIME_WIDTH: usize = 6;
const CONTENT_WIDTH: usize = 28;

pub struct BoardOptions {
    pub separator: String,
    pub color: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            separator: "-".to_string(),
            color: true,
        }
    }
}

/// Clock line only; this is what the one-second tick refreshes.
pub fn render_clock(now: NaiveDateTime, locale: Locale) -> String {
    format!(
        "{}  {} {}",
        date_label(now, locale),
        text(locale, Msg::ServerTime),
        format_clock(now)
    )
}

/// Full board. `now` is the display clock; bucket membership comes from
/// the session's snapshot, which may be older.
pub fn render_board(session: &Session, now: NaiveDateTime, opts: &BoardOptions) -> String {
    let locale = session.server().locale();
    let rule = opts
        .separator
        .chars()
        .next()
        .unwrap_or('-')
        .to_string()
        .repeat(TYPE_WIDTH + TIME_WIDTH + CONTENT_WIDTH + 3);

    let mut out = String::new();
    out.push_str(&render_clock(now, locale));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    if session.load_failed() {
        out.push_str(&colors::paint(colors::RED, text(locale, Msg::LoadFailed)));
        out.push('\n');
    }

    if let Some(snapshot) = session.snapshot() {
        let hour = snapshot.resolved_at.hour();
        let toggle_visible = session.disclosure().toggle_enabled(hour);

        let mut table = Table::new(vec![
            Column {
                header: text(locale, Msg::ColumnType).to_string(),
                width: TYPE_WIDTH,
            },
            Column {
                header: text(locale, Msg::ColumnTime).to_string(),
                width: TIME_WIDTH,
            },
            Column {
                header: text(locale, Msg::ColumnContent).to_string(),
                width: CONTENT_WIDTH,
            },
        ]);

        let empty = ResolvedBucket::default();
        for tt in session.task_types() {
            let bucket = snapshot.bucket(tt.key).unwrap_or(&empty);
            let expanded = session.disclosure().is_expanded(tt.key);
            group_rows(&mut table, tt, bucket, snapshot.resolved_at, locale, toggle_visible, expanded);
        }

        out.push_str(&table.render());
    }

    out.push_str(&rule);
    out.push('\n');
    for line in legend(locale) {
        out.push_str(line);
        out.push('\n');
    }

    if opts.color { out } else { strip_ansi(&out) }
}

fn group_rows(
    table: &mut Table,
    tt: &TaskType,
    bucket: &ResolvedBucket,
    resolved_at: NaiveDateTime,
    locale: Locale,
    toggle_visible: bool,
    expanded: bool,
) {
    let type_cell = format!("{}{}{}", tt.color, tt.label(locale), RESET);

    // current
    match &bucket.current {
        Some(cur) => {
            table.add_row(vec![
                type_cell,
                colors::for_current(&cur.time_label(), bucket.is_stale),
                colors::for_current(cur.row.label(locale), bucket.is_stale),
            ]);
        }
        None => {
            table.add_row(vec![
                type_cell,
                colors::grey(PLACEHOLDER_TIME),
                colors::grey(PLACEHOLDER_CONTENT),
            ]);
        }
    }

    // same-hour rows go stale on their own schedule, not the first row's
    for extra in &bucket.concurrent {
        let stale = is_stale(extra, resolved_at, tt.offset_minutes);
        table.add_row(entry_row(extra, locale, |s| colors::for_current(s, stale)));
    }

    if bucket.is_empty() {
        table.add_row(vec![
            String::new(),
            String::new(),
            colors::grey(text(locale, Msg::NoData)),
        ]);
        return;
    }

    for next in &bucket.upcoming {
        table.add_row(entry_row(next, locale, colors::grey));
    }

    if toggle_visible && !bucket.remaining.is_empty() {
        let label = if expanded {
            text(locale, Msg::Close)
        } else {
            text(locale, Msg::ShowMore)
        };
        table.add_row(vec![String::new(), String::new(), colors::paint(colors::CYAN, label)]);
    }

    if expanded {
        for rest in &bucket.remaining {
            table.add_row(entry_row(rest, locale, colors::grey));
        }
    }
}

fn entry_row(entry: &ResolvedEntry, locale: Locale, style: impl Fn(&str) -> String) -> Vec<String> {
    vec![
        String::new(),
        style(&entry.time_label()),
        style(entry.row.label(locale)),
    ]
}
