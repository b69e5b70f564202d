//! Expense repository for JSON storage
//!
//! The record store is a single `expenses.json` document holding the rows
//! in insertion order plus the next id to hand out. Every read goes to disk,
//! so callers always see the latest committed table.

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, NewExpense};

use super::file_io::{read_json, write_json_atomic};
use super::RecordStore;

/// On-disk layout of the record store
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    next_id: ExpenseId,
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// File-backed, append-only expense table
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> ExpenseResult<ExpenseData> {
        let mut data: ExpenseData = read_json(&self.path)?;

        // Never hand out an id that is already taken, even if the counter
        // was lost or edited by hand.
        if let Some(max) = data.expenses.iter().map(|e| e.id).max() {
            if data.next_id <= max {
                data.next_id = max.next();
            }
        }

        Ok(data)
    }
}

impl RecordStore for ExpenseRepository {
    fn read_all(&self) -> ExpenseResult<Vec<Expense>> {
        let data = self.load()?;
        tracing::debug!(
            path = %self.path.display(),
            rows = data.expenses.len(),
            "read expense table"
        );
        Ok(data.expenses)
    }

    fn insert_many(&self, expenses: Vec<NewExpense>) -> ExpenseResult<Vec<Expense>> {
        if expenses.is_empty() {
            return Ok(Vec::new());
        }

        let mut data = self.load()?;
        let mut inserted = Vec::with_capacity(expenses.len());

        for new in expenses {
            let expense = new.into_expense(data.next_id);
            data.next_id = data.next_id.next();
            inserted.push(expense);
        }

        data.expenses.extend(inserted.iter().cloned());
        write_json_atomic(&self.path, &data).map_err(|e| match e {
            ExpenseError::Storage(msg) => {
                ExpenseError::Storage(format!("Failed to append expenses: {}", msg))
            }
            other => other,
        })?;

        tracing::info!(
            path = %self.path.display(),
            inserted = inserted.len(),
            total = data.expenses.len(),
            "appended expenses"
        );
        Ok(inserted)
    }
}
