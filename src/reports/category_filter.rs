//! Category Filter Report
//!
//! Selects the expenses of one category and reports their date,
//! description and amount together with total, count and average.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::display::report::separator;
use crate::models::Money;

use super::table::ExpenseTable;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryFilterReport {
    /// Category as requested by the caller
    pub category: String,
    /// Matching rows, in store order
    pub expenses: ExpenseTable,
    pub total: Money,
    pub count: usize,
    pub average: Money,
}

#[derive(Tabled)]
struct FilteredLine {
    #[tabled(rename = "date")]
    date: String,
    #[tabled(rename = "description")]
    description: String,
    #[tabled(rename = "amount")]
    amount: String,
}

impl CategoryFilterReport {
    /// Filter a table by category, `None` when nothing matches
    pub fn generate(table: &ExpenseTable, category: &str) -> Option<Self> {
        let expenses = table.filter_category(category);
        let average = expenses.average()?;

        Some(Self {
            category: category.to_string(),
            total: expenses.total(),
            count: expenses.len(),
            average,
            expenses,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let lines: Vec<FilteredLine> = self
            .expenses
            .iter()
            .map(|row| FilteredLine {
                date: row.date.format("%Y-%m-%d").to_string(),
                description: row.description.clone(),
                amount: row.amount.to_decimal_string(),
            })
            .collect();

        let mut table = Table::new(lines);
        table
            .with(Style::blank())
            .modify(Columns::single(2), Alignment::right());

        let mut output = String::new();
        output.push_str(&format!("Expenses in {}\n", self.category.to_uppercase()));
        output.push_str(&separator('*', 70));
        output.push('\n');
        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!(
            "\nTotal in {}: {}\n",
            self.category,
            self.total.format_grouped(currency_symbol)
        ));
        output.push_str(&format!("Count: {} expenses\n", self.count));
        output.push_str(&format!(
            "Average: {}\n",
            self.average.format_with_symbol(currency_symbol)
        ));
        output.push_str(&separator('=', 100));
        output.push('\n');
        output
    }
}
