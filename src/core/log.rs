use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::{display_width, pad_right, strip_ansi};
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "report" => Colour::Green,
        "clear" => Colour::Red,
        "reload_failed" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn render_log(pool: &mut DbPool) -> AppResult<String> {
        let entries = load_log(&pool.conn)?;
        if entries.is_empty() {
            return Ok("📜 Internal log is empty.\n".to_string());
        }

        let rows: Vec<(i64, String, String, String, String)> = entries
            .into_iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (e.id, date, e.operation, op_target, e.message)
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| display_width(op_target))
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);
        let id_w = rows
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(0);

        let mut out = String::from("📜 Internal log:\n\n");

        for (id, date, operation, op_target, message) in rows {
            let color = color_for_operation(&operation);

            let visible = if op_target.chars().count() > OP_MAX_WIDTH {
                let mut s: String = op_target.chars().take(OP_MAX_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {} => {}\n",
                id,
                date,
                pad_right(&colored, op_w),
                strip_ansi(&message),
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(out)
    }
}
