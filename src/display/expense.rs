//! Expense display formatting
//!
//! Renders the expense table as a terminal table, one line per record.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;
use crate::reports::ExpenseTable;

use super::report::truncate;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Currency")]
    currency: String,
}

/// Format every row of the table
pub fn format_expense_table(table: &ExpenseTable, currency_symbol: &str) -> String {
    let lines: Vec<ExpenseLine> = table
        .iter()
        .map(|row| ExpenseLine {
            id: row.id.to_string(),
            date: row.date.format("%Y-%m-%d").to_string(),
            description: truncate(&row.description, DESCRIPTION_WIDTH),
            amount: row.amount.format_grouped(currency_symbol),
            category: row.category.clone(),
            currency: row.currency.clone(),
        })
        .collect();

    let mut rendered = Table::new(lines);
    rendered
        .with(Style::psql())
        .modify(Columns::single(3), Alignment::right());

    let mut output = rendered.to_string();
    output.push('\n');
    output
}

/// Format a single stored expense
pub fn format_expense_details(expense: &Expense, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {} {}\n",
        expense.amount.format_grouped(currency_symbol),
        expense.currency
    ));
    output.push_str(&format!("Category:    {}\n", expense.category));

    output
}
