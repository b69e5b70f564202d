//! Export module for the expense tracker
//!
//! An `ExportSink` writes the expense table to a destination file:
//! - CSV: spreadsheet-compatible, the default
//! - JSON: array of row objects for other tools
//!
//! Sinks write to a sibling temp file and rename it over the destination,
//! so a failed export leaves any previous file intact.

pub mod csv;
pub mod json;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::{ExpenseRow, ExpenseTable};
use crate::storage::file_io::temp_path_for;

pub use self::csv::{read_expenses_csv, write_expenses_csv, CsvExporter, CsvExpense};
pub use self::json::JsonExporter;

/// Destination for a serialized expense table
pub trait ExportSink {
    /// Write every row of `table` to `destination`, returning the row count
    fn write_table(&self, table: &ExpenseTable, destination: &Path) -> ExpenseResult<usize>;

    /// Short name of the format, used in messages
    fn format_name(&self) -> &'static str;
}

/// Run `write` against a temp file, then rename it over `destination`
pub(crate) fn write_replacing<F>(destination: &Path, write: F) -> ExpenseResult<usize>
where
    F: FnOnce(&mut BufWriter<File>) -> ExpenseResult<usize>,
{
    let temp_path = temp_path_for(destination);

    let file = File::create(&temp_path).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            destination.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let written = write(&mut writer).and_then(|count| {
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(count)
    });
    drop(writer);

    let result = written.and_then(|count| {
        fs::rename(&temp_path, destination).map_err(|e| {
            ExpenseError::Export(format!(
                "Failed to replace {}: {}",
                destination.display(),
                e
            ))
        })?;
        Ok(count)
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// One exported row; field order is the column order of the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub description: String,
    /// Plain decimal text, e.g. `4.00`
    pub amount: String,
    pub category: String,
    pub currency: String,
}

impl From<&ExpenseRow> for ExportRow {
    fn from(row: &ExpenseRow) -> Self {
        Self {
            date: row.date,
            description: row.description.clone(),
            amount: row.amount.to_decimal_string(),
            category: row.category.clone(),
            currency: row.currency.clone(),
        }
    }
}
