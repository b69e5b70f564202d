//! Storage layer for the expense tracker
//!
//! Provides the `RecordStore` contract consumed by the reporting layer and a
//! JSON file implementation with atomic writes.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::config::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, NewExpense};

/// Durable table of expense records
///
/// Inserts are append-only; reads return the full table in store order.
pub trait RecordStore {
    /// Read every stored expense, in store order
    fn read_all(&self) -> ExpenseResult<Vec<Expense>>;

    /// Append expenses in one write, returning them with their assigned ids
    fn insert_many(&self, expenses: Vec<NewExpense>) -> ExpenseResult<Vec<Expense>>;

    /// Append a single expense
    fn insert(&self, expense: NewExpense) -> ExpenseResult<Expense> {
        self.insert_many(vec![expense])?
            .pop()
            .ok_or_else(|| ExpenseError::Storage("Insert returned no record".into()))
    }
}

/// Handle to the opened record store
///
/// Opened once by the binary and borrowed by the services; the store is
/// released when this value is dropped.
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Open the store, creating its directories if needed
    pub fn open(paths: ExpensePaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;
        tracing::debug!(path = %paths.expenses_file().display(), "opened record store");

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            paths,
        })
    }

    /// Check if any expense has ever been written
    pub fn is_initialized(&self) -> bool {
        self.paths.expenses_file().exists()
    }
}

impl Drop for Storage {
    fn drop(&mut self) {
        tracing::debug!(path = %self.expenses.path().display(), "released record store");
    }
}
