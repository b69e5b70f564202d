//! Tabular view of the record store
//!
//! `ExpenseTable::build` is the only way reports obtain their data: it reads
//! the store once and returns a fresh, owned table. Category labels are
//! normalized to lowercase here so filters can compare them directly.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{normalize_category, Expense, ExpenseId, Money};
use crate::storage::RecordStore;

/// Column names, in display and export order
pub const COLUMNS: [&str; 5] = ["date", "description", "amount", "category", "currency"];

/// One row of the expense table
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    /// Always lowercase
    pub category: String,
    pub currency: String,
}

impl From<Expense> for ExpenseRow {
    fn from(expense: Expense) -> Self {
        Self {
            id: expense.id,
            date: expense.date,
            description: expense.description,
            amount: expense.amount,
            category: normalize_category(&expense.category),
            currency: expense.currency,
        }
    }
}

/// In-memory table of expenses, in store order
///
/// The absolute amounts of all rows sum without overflow, so totals over
/// the table or any subset of it are exact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseTable {
    rows: Vec<ExpenseRow>,
}

impl ExpenseTable {
    /// Read the whole store into a fresh table
    ///
    /// An empty store produces an empty table. Fails when the stored
    /// amounts are too large to be totalled.
    pub fn build<S: RecordStore + ?Sized>(store: &S) -> ExpenseResult<Self> {
        let rows: Vec<ExpenseRow> = store
            .read_all()?
            .into_iter()
            .map(ExpenseRow::from)
            .collect();

        let magnitude = rows.iter().try_fold(Money::zero(), |acc, row| {
            acc.checked_add(Money::from_cents(row.amount.cents().checked_abs()?))
        });
        if magnitude.is_none() {
            return Err(ExpenseError::Storage(
                "Stored expense amounts are too large to total".into(),
            ));
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ExpenseRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRow> {
        self.rows.iter()
    }

    /// Rows whose category matches `category`, ignoring case and surrounding
    /// whitespace. Returns a new table; `self` is left untouched.
    pub fn filter_category(&self, category: &str) -> Self {
        let wanted = normalize_category(category);
        let rows = self
            .rows
            .iter()
            .filter(|row| row.category == wanted)
            .cloned()
            .collect();
        Self { rows }
    }

    /// Exact sum of the amount column
    pub fn total(&self) -> Money {
        self.rows.iter().map(|row| row.amount).sum()
    }

    /// Mean of the amount column rounded to the cent, `None` when empty
    pub fn average(&self) -> Option<Money> {
        self.total().average(self.len())
    }

    pub fn amounts(&self) -> impl Iterator<Item = Money> + '_ {
        self.rows.iter().map(|row| row.amount)
    }
}

impl<'a> IntoIterator for &'a ExpenseTable {
    type Item = &'a ExpenseRow;
    type IntoIter = std::slice::Iter<'a, ExpenseRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
