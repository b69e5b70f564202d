//! Expense service
//!
//! Validation and defaulting for expenses before they reach the record store.

use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{read_expenses_csv, CsvExpense};
use crate::models::{Expense, Money, NewExpense};
use crate::storage::RecordStore;

/// Service for recording expenses
pub struct ExpenseService<'a, S: RecordStore + ?Sized> {
    store: &'a S,
    default_currency: String,
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    /// Defaults to today
    pub date: Option<NaiveDate>,
    pub description: String,
    pub amount: Money,
    pub category: String,
    /// Defaults to the configured currency
    pub currency: Option<String>,
}

impl<'a, S: RecordStore + ?Sized> ExpenseService<'a, S> {
    /// Create a new expense service
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            default_currency: "USD".to_string(),
        }
    }

    /// Currency used when an expense does not name one
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Validate and record one expense
    pub fn add(&self, input: CreateExpenseInput) -> ExpenseResult<Expense> {
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());
        let currency = input
            .currency
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| self.default_currency.clone());

        let expense = NewExpense::new(
            date,
            input.description,
            input.amount,
            &input.category,
            &currency,
        );
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let expense = self.store.insert(expense)?;
        tracing::info!(id = %expense.id, category = %expense.category, "added expense");
        Ok(expense)
    }

    /// Record every row of a CSV file in the export layout
    ///
    /// All rows are validated before anything is written, so a bad row
    /// leaves the store unchanged.
    pub fn import_csv(&self, path: &Path) -> ExpenseResult<Vec<Expense>> {
        let mut expenses = Vec::new();
        for CsvExpense { line, mut expense } in read_expenses_csv(path)? {
            if expense.currency.is_empty() {
                expense.currency = self.default_currency.to_uppercase();
            }
            expense
                .validate()
                .map_err(|e| ExpenseError::Validation(format!("Line {}: {}", line, e)))?;
            expenses.push(expense);
        }

        if expenses.is_empty() {
            return Ok(Vec::new());
        }

        let imported = self.store.insert_many(expenses)?;
        tracing::info!(count = imported.len(), path = %path.display(), "imported expenses");
        Ok(imported)
    }
}
