//! CLI commands for recording and listing expenses

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_expense_details;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::services::{CreateExpenseInput, ExpenseService, ReportService};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub description: String,

    /// Amount spent (e.g., "4.00" or "$1,250.50")
    #[arg(allow_negative_numbers = true)]
    pub amount: String,

    /// Category name (case-insensitive)
    #[arg(short, long)]
    pub category: String,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Currency code, defaults to the configured currency
    #[arg(long)]
    pub currency: Option<String>,
}

/// Handle `add`
pub fn handle_add_command(
    storage: &Storage,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let amount = Money::parse(&args.amount).map_err(|e| {
        ExpenseError::Validation(format!("Invalid amount '{}': {}", args.amount, e))
    })?;

    let date = args.date.as_deref().map(parse_date).transpose()?;

    let service = ExpenseService::new(&storage.expenses)
        .with_default_currency(settings.default_currency.clone());
    let expense = service.add(CreateExpenseInput {
        date,
        description: args.description,
        amount,
        category: args.category,
        currency: args.currency,
    })?;

    println!("Recorded expense:");
    print!("{}", format_expense_details(&expense, &settings.currency_symbol));
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(storage: &Storage, settings: &Settings) -> ExpenseResult<()> {
    let service = ReportService::new(&storage.expenses)
        .with_currency_symbol(settings.currency_symbol.clone());
    service.list_all(&mut io::stdout().lock())?;
    Ok(())
}

/// Handle `import`
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    file: PathBuf,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(&storage.expenses)
        .with_default_currency(settings.default_currency.clone());
    let imported = service.import_csv(&file)?;

    println!(
        "Imported {} expenses from '{}'",
        imported.len(),
        file.display()
    );
    Ok(())
}

fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}
