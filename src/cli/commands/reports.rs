use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::{info, success};
use crate::utils::colors::{BOLD, RESET, grey};

const WRAP_WIDTH: usize = 80;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reports { clear, json } = cmd {
        let locale = cfg.server()?.locale();
        let mut pool = DbPool::open(&cfg.database)?;

        if *clear {
            let removed = ReportLogic::clear(&mut pool)?;
            success(format!("{} ({removed})", text(locale, Msg::ReportsCleared)));
            return Ok(());
        }

        let entries = ReportLogic::list(&mut pool)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            info(text(locale, Msg::NoReports));
            return Ok(());
        }

        println!("📋 {}\n", text(locale, Msg::ReportsHeader));

        let wrap = textwrap::Options::new(WRAP_WIDTH).subsequent_indent("    ");
        for (i, entry) in entries.iter().enumerate() {
            let line = ReportLogic::format_line(entry, locale);
            let wrapped = textwrap::fill(&line, &wrap);
            // newest first and highlighted
            if i == 0 {
                println!("{BOLD}{wrapped}{RESET}");
            } else {
                println!("{}", grey(&wrapped));
            }
        }
    }
    Ok(())
}
