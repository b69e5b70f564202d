//! Service layer for the expense tracker
//!
//! The service layer sits between the binary and the record store: it
//! validates input on the way in and runs the reports on the way out.

pub mod expense;
pub mod report;

pub use expense::{CreateExpenseInput, ExpenseService};
pub use report::{ReportService, NO_DATA_MESSAGE, NO_EXPENSES_MESSAGE};
