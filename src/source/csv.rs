use super::{ScheduleSource, TabularRow, rows_from_table, template_headers};
use crate::errors::{AppError, AppResult};
use crate::models::schedule::ScheduleRow;
use crate::models::task_type::TASK_TYPES;
use csv::{ReaderBuilder, Trim, Writer};
use std::path::{Path, PathBuf};

/// Schedule table stored as CSV (a spreadsheet "Save as CSV" export).
/// The file is re-read on every `load`.
pub struct CsvScheduleSource {
    path: PathBuf,
}

impl CsvScheduleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw table, one map per data row.
    pub fn read_table(&self) -> AppResult<Vec<TabularRow>> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_path(&self.path)?;

        // Spreadsheet exports often start with a UTF-8 BOM.
        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').to_string())
            .collect();

        let mut table = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let row: TabularRow = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.clone(), v.to_string()))
                .collect();
            table.push(row);
        }
        Ok(table)
    }

    /// Write an empty table with the expected headers, unless the file exists.
    pub fn write_template(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let mut wtr = Writer::from_path(&self.path)?;
        wtr.write_record(template_headers(&TASK_TYPES))?;
        wtr.flush()?;
        Ok(true)
    }
}

impl ScheduleSource for CsvScheduleSource {
    fn load(&self) -> AppResult<Vec<ScheduleRow>> {
        let table = self
            .read_table()
            .map_err(|e| AppError::LoadFailed(format!("{}: {e}", self.path.display())))?;
        Ok(rows_from_table(&table, &TASK_TYPES))
    }
}
