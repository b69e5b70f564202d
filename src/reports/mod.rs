//! Reports over the expense table
//!
//! Every report starts from a freshly built `ExpenseTable` and never
//! modifies it.

pub mod category_filter;
pub mod category_summary;
pub mod statistics;
pub mod table;

pub use category_filter::CategoryFilterReport;
pub use category_summary::{CategorySummary, CategoryTotals};
pub use statistics::SummaryStatistics;
pub use table::{ExpenseRow, ExpenseTable, COLUMNS};

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::error::{ExpenseError, ExpenseResult};
    use crate::models::{Expense, ExpenseId, Money, NewExpense};
    use crate::storage::RecordStore;

    /// Read-only store over a fixed set of rows
    #[derive(Default)]
    pub struct FixedStore(pub Vec<Expense>);

    impl RecordStore for FixedStore {
        fn read_all(&self) -> ExpenseResult<Vec<Expense>> {
            Ok(self.0.clone())
        }

        fn insert_many(&self, _expenses: Vec<NewExpense>) -> ExpenseResult<Vec<Expense>> {
            Err(ExpenseError::Storage("fixed store is read-only".into()))
        }
    }

    /// Store whose every operation fails
    pub struct FailingStore;

    impl RecordStore for FailingStore {
        fn read_all(&self) -> ExpenseResult<Vec<Expense>> {
            Err(ExpenseError::Storage("disk unavailable".into()))
        }

        fn insert_many(&self, _expenses: Vec<NewExpense>) -> ExpenseResult<Vec<Expense>> {
            Err(ExpenseError::Storage("disk unavailable".into()))
        }
    }

    /// Build a stored expense without lowercasing the category
    pub fn expense(id: i64, description: &str, cents: i64, category: &str) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            date: NaiveDate::from_ymd_opt(2025, 1, id as u32).unwrap(),
            description: description.to_string(),
            amount: Money::from_cents(cents),
            category: category.to_string(),
            currency: "USD".to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 31, 12, 0, 0).unwrap(),
        }
    }

    /// coffee 4.00 food, gas 24.00 transportation, lunch 10.00 food
    pub fn sample_store() -> FixedStore {
        FixedStore(vec![
            expense(1, "coffee", 400, "food"),
            expense(2, "gas", 2400, "transportation"),
            expense(3, "lunch", 1000, "food"),
        ])
    }
}
