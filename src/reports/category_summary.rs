//! Category Summary
//!
//! Groups the expense table by category and reports total, count and
//! average per group, largest total first.

use std::collections::HashMap;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::display::report::separator;
use crate::models::Money;

use super::table::ExpenseTable;

/// Aggregates for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotals {
    pub category: String,
    /// Exact sum of the category's amounts
    pub total: Money,
    pub count: usize,
    /// Mean amount rounded to the cent
    pub average: Money,
}

/// Per-category aggregates ordered by total descending
///
/// Categories with equal totals keep the order in which they were first
/// seen in the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySummary {
    rows: Vec<CategoryTotals>,
}

#[derive(Tabled)]
struct SummaryLine {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Average")]
    average: String,
}

impl CategorySummary {
    /// Aggregate a table by category
    pub fn generate(table: &ExpenseTable) -> Self {
        let mut position: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(String, Money, usize)> = Vec::new();

        for row in table {
            match position.get(row.category.as_str()) {
                Some(&idx) => {
                    let group = &mut groups[idx];
                    group.1 += row.amount;
                    group.2 += 1;
                }
                None => {
                    position.insert(row.category.as_str(), groups.len());
                    groups.push((row.category.clone(), row.amount, 1));
                }
            }
        }

        let mut rows: Vec<CategoryTotals> = groups
            .into_iter()
            .map(|(category, total, count)| CategoryTotals {
                average: total.average(count).unwrap_or_default(),
                category,
                total,
                count,
            })
            .collect();

        // Stable sort keeps encounter order for ties
        rows.sort_by(|a, b| b.total.cmp(&a.total));

        Self { rows }
    }

    pub fn rows(&self) -> &[CategoryTotals] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum over all categories
    pub fn grand_total(&self) -> Money {
        self.rows.iter().map(|row| row.total).sum()
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let lines: Vec<SummaryLine> = self
            .rows
            .iter()
            .map(|row| SummaryLine {
                category: row.category.clone(),
                total: row.total.format_grouped(currency_symbol),
                count: row.count,
                average: row.average.format_with_symbol(currency_symbol),
            })
            .collect();

        let mut table = Table::new(lines);
        table
            .with(Style::psql())
            .modify(Columns::new(1..), Alignment::right());

        let mut output = String::new();
        output.push_str("SPENDING BY CATEGORY\n");
        output.push_str(&separator('*', 70));
        output.push('\n');
        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!(
            "Total spent: {}\n",
            self.grand_total().format_grouped(currency_symbol)
        ));
        output.push_str(&separator('*', 70));
        output.push('\n');
        output
    }
}
