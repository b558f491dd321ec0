//! Cell grid reader - workbook file → named worksheets of cell text

use crate::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::{TimeDelta, Timelike};
use std::path::Path;
use tracing::debug;

/// One worksheet row; `None` marks an empty cell
pub type Row = Vec<Option<String>>;

/// A worksheet as a rectangular grid of optional cell text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Row 0, if the sheet has any rows
    pub fn header(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Every row after the header
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    fn from_range(name: String, range: &Range<Data>) -> Self {
        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        Self { name, rows }
    }
}

/// Worksheets in workbook order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    pub sheets: Vec<Worksheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Worksheet>) -> Self {
        Self { sheets }
    }

    /// Open and decode a workbook (xlsx, xlsm, xlsb, xls or ods)
    pub fn open<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ImportError::MissingFile(path.to_path_buf()));
        }

        let mut workbook = open_workbook_auto(path)?;
        let sheet_names = workbook.sheet_names().to_vec();

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;
            debug!(sheet = %sheet_name, rows = range.height(), "read worksheet");
            sheets.push(Worksheet::from_range(sheet_name, &range));
        }

        Ok(Self { sheets })
    }
}

/// Render a calamine cell the way the console expects to receive it
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::DateTime(dt) => Some(excel_datetime_text(dt)),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Typed date cell → `YYYY-MM-DD[ HH:MM:SS]`, time-only cell → `HH:MM:SS`,
/// duration cell → `H:MM:SS`
fn excel_datetime_text(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return match dt.as_duration() {
            Some(duration) => duration_text(duration),
            None => dt.as_f64().to_string(),
        };
    }
    let time_only = (0.0..1.0).contains(&dt.as_f64());
    match dt.as_datetime() {
        Some(value) if time_only => value.format("%H:%M:%S").to_string(),
        Some(value) if value.num_seconds_from_midnight() == 0 => {
            value.format("%Y-%m-%d").to_string()
        }
        Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => dt.as_f64().to_string(),
    }
}

/// Elapsed time as `H:MM:SS`; hours run past 24
fn duration_text(duration: TimeDelta) -> String {
    let seconds = (duration.num_milliseconds() as f64 / 1000.0).round() as i64;
    let sign = if seconds < 0 { "-" } else { "" };
    let seconds = seconds.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}
