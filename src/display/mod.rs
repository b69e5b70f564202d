//! Display formatting for terminal output

pub mod expense;
pub mod report;

pub use expense::{format_expense_details, format_expense_table};
pub use report::{separator, truncate};
