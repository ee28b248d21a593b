use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::i18n::{Msg, text};
use crate::ui::messages::{error, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        comment,
        task,
        kind,
    } = cmd
    {
        let locale = cfg.server()?.locale();

        // validate before touching the database
        if let Err(e) = ReportLogic::validate(task, kind, comment) {
            if matches!(e, AppError::EmptyInput) {
                error(text(locale, Msg::EmptyComment));
                info(text(locale, Msg::CommentHint));
            }
            return Err(e);
        }

        let mut pool = DbPool::open(&cfg.database)?;
        let entry = ReportLogic::submit(&mut pool, task, kind, comment)?;

        success(text(locale, Msg::ReportSent));
        println!("{}", ReportLogic::format_line(&entry, locale));
    }
    Ok(())
}
