//! JSON export of the expense table

use std::io::Write;
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::ExpenseTable;

use super::{write_replacing, ExportRow, ExportSink};

/// Writes the expense table as a pretty-printed JSON array
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportSink for JsonExporter {
    fn write_table(&self, table: &ExpenseTable, destination: &Path) -> ExpenseResult<usize> {
        let rows: Vec<ExportRow> = table.iter().map(ExportRow::from).collect();

        write_replacing(destination, |writer| {
            serde_json::to_writer_pretty(&mut *writer, &rows).map_err(|e| {
                ExpenseError::Export(format!("Failed to serialize expenses: {}", e))
            })?;
            writeln!(writer)?;
            Ok(rows.len())
        })
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}
