//! CSV export and re-import of the expense table
//!
//! Layout: a header row `date,description,amount,category,currency`
//! followed by one row per expense, amounts as plain decimal text.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, NewExpense};
use crate::reports::{ExpenseTable, COLUMNS};

use super::{write_replacing, ExportRow, ExportSink};

/// Writes the expense table as comma-separated text
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl ExportSink for CsvExporter {
    fn write_table(&self, table: &ExpenseTable, destination: &Path) -> ExpenseResult<usize> {
        write_replacing(destination, |writer| write_expenses_csv(table, writer))
    }

    fn format_name(&self) -> &'static str {
        "csv"
    }
}

/// Write the table as CSV to any writer, returning the number of data rows
///
/// The header row is written even when the table is empty.
pub fn write_expenses_csv<W: Write>(table: &ExpenseTable, writer: W) -> ExpenseResult<usize> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer
        .write_record(COLUMNS)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for row in table {
        csv_writer
            .serialize(ExportRow::from(row))
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(table.len())
}

/// An unsaved expense read from CSV, with the file line its record starts on
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExpense {
    pub line: u64,
    pub expense: NewExpense,
}

/// Read a CSV file in the export layout back into unsaved expenses
pub fn read_expenses_csv(path: &Path) -> ExpenseResult<Vec<CsvExpense>> {
    let file = File::open(path).map_err(|e| {
        ExpenseError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;
    parse_expenses_csv(file)
}

fn parse_expenses_csv<R: Read>(reader: R) -> ExpenseResult<Vec<CsvExpense>> {
    let mut csv_reader = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(ExpenseError::Csv(format!(
            "Missing column(s): {}",
            missing.join(", ")
        )));
    }

    let mut expenses = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        // Quoted fields may span lines, so count from the reader position
        let line = record.position().map_or(0, |pos| pos.line());

        let row: ExportRow = record
            .deserialize(Some(&headers))
            .map_err(|e| ExpenseError::Csv(format!("Line {}: {}", line, e)))?;

        let amount = Money::parse(&row.amount)
            .map_err(|e| ExpenseError::Validation(format!("Line {}: {}", line, e)))?;

        expenses.push(CsvExpense {
            line,
            expense: NewExpense::new(
                row.date,
                row.description,
                amount,
                &row.category,
                &row.currency,
            ),
        });
    }

    Ok(expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::sample_store;
    use tempfile::TempDir;

    #[test]
    fn test_write_csv_layout() {
        let table = ExpenseTable::build(&sample_store()).unwrap();
        let mut output = Vec::new();
        let count = write_expenses_csv(&table, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(count, 3);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "date,description,amount,category,currency");
        assert_eq!(lines[1], "2025-01-01,coffee,4.00,food,USD");
        assert_eq!(lines[2], "2025-01-02,gas,24.00,transportation,USD");
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let mut output = Vec::new();
        let count = write_expenses_csv(&ExpenseTable::default(), &mut output).unwrap();

        assert_eq!(count, 0);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "date,description,amount,category,currency\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_export.csv");
        let table = ExpenseTable::build(&sample_store()).unwrap();

        let count = CsvExporter.write_table(&table, &path).unwrap();
        let read_back = read_expenses_csv(&path).unwrap();

        assert_eq!(count, read_back.len());
        for (row, CsvExpense { expense, .. }) in table.iter().zip(&read_back) {
            assert_eq!(row.date, expense.date);
            assert_eq!(row.description, expense.description);
            assert_eq!(row.amount, expense.amount);
            assert_eq!(row.category, expense.category);
            assert_eq!(row.currency, expense.currency);
        }
    }

    #[test]
    fn test_descriptions_with_commas_are_quoted() {
        let store = crate::reports::fixtures::FixedStore(vec![
            crate::reports::fixtures::expense(1, "bread, milk", 650, "groceries"),
        ]);
        let table = ExpenseTable::build(&store).unwrap();
        let mut output = Vec::new();
        write_expenses_csv(&table, &mut output).unwrap();

        let parsed = parse_expenses_csv(output.as_slice()).unwrap();
        assert_eq!(parsed[0].expense.description, "bread, milk");
    }

    #[test]
    fn test_bad_amount_reports_line() {
        let data = "date,description,amount,category,currency\n\
                    2025-01-01,coffee,4.00,food,USD\n\
                    2025-01-02,gas,lots,transportation,USD\n";
        let err = parse_expenses_csv(data.as_bytes()).unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("Line 3"));
    }

    #[test]
    fn test_lines_follow_multiline_fields() {
        let data = "date,description,amount,category,currency\n\
                    2025-01-01,\"bread\nand milk\",6.50,groceries,USD\n\
                    2025-01-02,gas,lots,transportation,USD\n";
        let err = parse_expenses_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Line 4"), "{}", err);

        let data = "date,description,amount,category,currency\n\
                    2025-01-01,\"bread\nand milk\",6.50,groceries,USD\n\
                    2025-01-02,gas,24.00,transportation,USD\n";
        let parsed = parse_expenses_csv(data.as_bytes()).unwrap();
        assert_eq!(parsed[0].line, 2);
        assert_eq!(parsed[0].expense.description, "bread\nand milk");
        assert_eq!(parsed[1].line, 4);
    }

    #[test]
    fn test_missing_column() {
        let data = "date,description,amount\n2025-01-01,coffee,4.00\n";
        let err = parse_expenses_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("category"));
    }

    #[test]
    fn test_failed_export_keeps_previous_file() {
        let temp_dir = TempDir::new().unwrap();
        let table = ExpenseTable::build(&sample_store()).unwrap();

        // A directory cannot be replaced by a file
        let destination = temp_dir.path().join("taken");
        std::fs::create_dir(&destination).unwrap();
        std::fs::write(destination.join("keep.txt"), "previous").unwrap();

        let err = CsvExporter.write_table(&table, &destination).unwrap_err();

        assert!(matches!(err, ExpenseError::Export(_)));
        assert!(destination.is_dir());
        assert_eq!(
            std::fs::read_to_string(destination.join("keep.txt")).unwrap(),
            "previous"
        );
        assert!(!temp_dir.path().join("taken.tmp").exists());
    }

    #[test]
    fn test_export_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_export.csv");
        std::fs::write(&path, "stale").unwrap();
        let table = ExpenseTable::build(&sample_store()).unwrap();

        CsvExporter.write_table(&table, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("date,description"));
        assert!(!temp_dir.path().join("expenses_export.csv.tmp").exists());
    }

    #[test]
    fn test_missing_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_expenses_csv(&temp_dir.path().join("nope.csv")).unwrap_err();
        assert!(err.is_storage());
    }
}
