//! Reporting service
//!
//! Runs the reports against the record store and writes their terminal
//! output. Each call builds a fresh `ExpenseTable`, so results always
//! reflect the store at the moment of the call.
//!
//! Empty tables and categories without matches are reported with a message
//! and an early return; only storage and output failures become errors.

use std::io::Write;
use std::path::Path;

use crate::display::{format_expense_table, separator};
use crate::error::ExpenseResult;
use crate::export::ExportSink;
use crate::reports::{CategoryFilterReport, CategorySummary, ExpenseTable, SummaryStatistics};
use crate::storage::RecordStore;

/// Printed by `list_all` on an empty store
pub const NO_EXPENSES_MESSAGE: &str = "no expenses recorded";

/// Printed by the aggregating reports on an empty store
pub const NO_DATA_MESSAGE: &str = "no data to analyze";

/// Service for running reports over the record store
pub struct ReportService<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    currency_symbol: String,
}

impl<'a, S: RecordStore + ?Sized> ReportService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            currency_symbol: "$".to_string(),
        }
    }

    /// Use a different symbol when printing money amounts
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Build a fresh table from the store
    pub fn table(&self) -> ExpenseResult<ExpenseTable> {
        ExpenseTable::build(self.store)
    }

    /// Print every expense, returning how many were listed
    pub fn list_all<W: Write>(&self, out: &mut W) -> ExpenseResult<usize> {
        let table = self.table()?;

        if table.is_empty() {
            writeln!(out, "{}", NO_EXPENSES_MESSAGE)?;
            return Ok(0);
        }

        writeln!(out, "\nYour expenses ({} total):", table.len())?;
        writeln!(out, "{}", separator('=', 100))?;
        write!(out, "{}", format_expense_table(&table, &self.currency_symbol))?;

        Ok(table.len())
    }

    /// Print and return totals per category, largest first
    pub fn summarize_by_category<W: Write>(
        &self,
        out: &mut W,
    ) -> ExpenseResult<Option<CategorySummary>> {
        let table = self.table()?;

        if table.is_empty() {
            writeln!(out, "{}", NO_DATA_MESSAGE)?;
            return Ok(None);
        }

        let summary = CategorySummary::generate(&table);
        write!(out, "{}", summary.format_terminal(&self.currency_symbol))?;

        tracing::debug!(categories = summary.len(), "summarized by category");
        Ok(Some(summary))
    }

    /// Print and return the expenses of one category (case-insensitive)
    pub fn filter_by_category<W: Write>(
        &self,
        category: &str,
        out: &mut W,
    ) -> ExpenseResult<Option<CategoryFilterReport>> {
        let table = self.table()?;

        match CategoryFilterReport::generate(&table, category) {
            Some(report) => {
                write!(out, "{}", report.format_terminal(&self.currency_symbol))?;
                Ok(Some(report))
            }
            None => {
                writeln!(out, "No expenses found in category {}", category)?;
                Ok(None)
            }
        }
    }

    /// Print and return descriptive statistics of the amount column
    pub fn summary_statistics<W: Write>(
        &self,
        out: &mut W,
    ) -> ExpenseResult<Option<SummaryStatistics>> {
        let table = self.table()?;

        let Some(stats) = SummaryStatistics::generate(&table) else {
            writeln!(out, "{}", NO_DATA_MESSAGE)?;
            return Ok(None);
        };

        writeln!(out, "\nSUMMARY STATISTICS")?;
        writeln!(out, "{}", separator('=', 50))?;
        write!(out, "{}", stats.format_terminal())?;

        Ok(Some(stats))
    }

    /// Write the whole table to `destination`, returning the row count
    ///
    /// An existing file is replaced; the overwrite is announced ahead of the
    /// export summary, once the new file is in place.
    pub fn export<W: Write>(
        &self,
        sink: &dyn ExportSink,
        destination: &Path,
        out: &mut W,
    ) -> ExpenseResult<usize> {
        let table = self.table()?;
        let replaced = destination.exists();

        let count = sink.write_table(&table, destination)?;

        if replaced {
            tracing::warn!(path = %destination.display(), "replaced existing export");
            writeln!(out, "Replaced existing file '{}'", destination.display())?;
        }
        tracing::info!(
            path = %destination.display(),
            format = sink.format_name(),
            rows = count,
            "exported expenses"
        );

        writeln!(
            out,
            "Exported {} expenses to '{}'",
            count,
            destination.display()
        )?;
        if sink.format_name() == "csv" {
            writeln!(
                out,
                "You can open this file with any spreadsheet application"
            )?;
        }

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{CsvExporter, JsonExporter};
    use crate::models::Money;
    use crate::reports::fixtures::{expense, sample_store, FailingStore, FixedStore};
    use tempfile::TempDir;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_store_reports_no_data_everywhere() {
        let store = FixedStore::default();
        let service = ReportService::new(&store);

        let mut out = Vec::new();
        assert_eq!(service.list_all(&mut out).unwrap(), 0);
        assert_eq!(output(out), "no expenses recorded\n");

        let mut out = Vec::new();
        assert!(service.summarize_by_category(&mut out).unwrap().is_none());
        assert_eq!(output(out), "no data to analyze\n");

        let mut out = Vec::new();
        assert!(service.summary_statistics(&mut out).unwrap().is_none());
        assert_eq!(output(out), "no data to analyze\n");

        let mut out = Vec::new();
        assert!(service.filter_by_category("food", &mut out).unwrap().is_none());
        assert_eq!(output(out), "No expenses found in category food\n");
    }

    #[test]
    fn test_list_all() {
        let store = sample_store();
        let service = ReportService::new(&store);

        let mut out = Vec::new();
        assert_eq!(service.list_all(&mut out).unwrap(), 3);

        let text = output(out);
        assert!(text.contains("Your expenses (3 total):"));
        assert!(text.contains(&"=".repeat(100)));
        assert!(text.contains("coffee"));
        assert!(text.contains("lunch"));
    }

    #[test]
    fn test_summarize_by_category() {
        let store = sample_store();
        let service = ReportService::new(&store);

        let mut out = Vec::new();
        let summary = service.summarize_by_category(&mut out).unwrap().unwrap();

        let order: Vec<_> = summary.rows().iter().map(|r| r.category.as_str()).collect();
        assert_eq!(order, vec!["transportation", "food"]);
        assert!(output(out).contains("SPENDING BY CATEGORY"));
    }

    #[test]
    fn test_filter_by_category() {
        let store = sample_store();
        let service = ReportService::new(&store);

        let mut out = Vec::new();
        let report = service
            .filter_by_category("transportation", &mut out)
            .unwrap()
            .unwrap();

        assert_eq!(report.count, 1);
        assert_eq!(report.expenses.rows()[0].amount, Money::from_cents(2400));
        let text = output(out);
        assert!(text.contains("Total in transportation: $24.00"));
        assert!(text.contains("Count: 1 expenses"));
        assert!(text.contains("Average: $24.00"));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let store = sample_store();
        let service = ReportService::new(&store);

        let upper = service.filter_by_category("Food", &mut Vec::new()).unwrap();
        let lower = service.filter_by_category("food", &mut Vec::new()).unwrap();
        assert_eq!(upper.unwrap().expenses, lower.unwrap().expenses);
    }

    #[test]
    fn test_filter_unknown_category() {
        let store = sample_store();
        let service = ReportService::new(&store);

        let mut out = Vec::new();
        assert!(service.filter_by_category("Rent", &mut out).unwrap().is_none());
        assert_eq!(output(out), "No expenses found in category Rent\n");
    }

    #[test]
    fn test_summary_statistics() {
        let store = sample_store();
        let service = ReportService::new(&store);

        let mut out = Vec::new();
        let stats = service.summary_statistics(&mut out).unwrap().unwrap();

        assert_eq!(stats.count, 3);
        let text = output(out);
        assert!(text.contains("SUMMARY STATISTICS"));
        assert!(text.contains("12.67"));
    }

    #[test]
    fn test_currency_symbol() {
        let store = sample_store();
        let service = ReportService::new(&store).with_currency_symbol("€");

        let mut out = Vec::new();
        service.filter_by_category("food", &mut out).unwrap();
        assert!(output(out).contains("Total in food: €14.00"));
    }

    #[test]
    fn test_export_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses_export.csv");
        let store = sample_store();
        let service = ReportService::new(&store);

        let mut out = Vec::new();
        let count = service.export(&CsvExporter, &path, &mut out).unwrap();

        assert_eq!(count, 3);
        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 4);
        let text = output(out);
        assert!(text.contains(&format!("Exported 3 expenses to '{}'", path.display())));
        assert!(!text.contains("Replaced"));
    }

    #[test]
    fn test_export_announces_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        std::fs::write(&path, "old contents").unwrap();
        let store = sample_store();
        let service = ReportService::new(&store);

        let mut out = Vec::new();
        service.export(&JsonExporter, &path, &mut out).unwrap();

        let text = output(out);
        let notice = text.find("Replaced existing file").unwrap();
        assert!(notice < text.find("Exported 3 expenses").unwrap());
        assert!(!text.contains("spreadsheet"));
        assert!(!std::fs::read_to_string(&path).unwrap().contains("old contents"));
    }

    #[test]
    fn test_failed_export_prints_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("reports");
        std::fs::create_dir(&destination).unwrap();
        let store = sample_store();
        let service = ReportService::new(&store);

        let mut out = Vec::new();
        let err = service.export(&CsvExporter, &destination, &mut out).unwrap_err();

        assert!(err.is_storage());
        assert!(out.is_empty());
        assert!(destination.is_dir());
    }

    #[test]
    fn test_totals_that_overflow_are_storage_errors() {
        let store = FixedStore(vec![
            expense(1, "yacht", Money::parse("92233720368547758.07").unwrap().cents(), "food"),
            expense(2, "gum", 1, "food"),
        ]);
        let service = ReportService::new(&store);

        let mut out = Vec::new();
        assert!(service.summarize_by_category(&mut out).unwrap_err().is_storage());
        assert!(service.filter_by_category("food", &mut out).unwrap_err().is_storage());
        assert!(service.summary_statistics(&mut out).unwrap_err().is_storage());
        assert!(service.list_all(&mut out).unwrap_err().is_storage());
        assert!(out.is_empty());
    }

    #[test]
    fn test_storage_errors_propagate() {
        let service = ReportService::new(&FailingStore);
        let temp_dir = TempDir::new().unwrap();

        let mut out = Vec::new();
        assert!(service.list_all(&mut out).unwrap_err().is_storage());
        assert!(service.summarize_by_category(&mut out).unwrap_err().is_storage());
        assert!(service.filter_by_category("food", &mut out).unwrap_err().is_storage());
        assert!(service.summary_statistics(&mut out).unwrap_err().is_storage());
        assert!(service
            .export(&CsvExporter, &temp_dir.path().join("x.csv"), &mut out)
            .unwrap_err()
            .is_storage());

        assert!(out.is_empty());
        assert!(!temp_dir.path().join("x.csv").exists());
    }
}
