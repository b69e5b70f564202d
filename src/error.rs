//! Custom error types for the expense tracker
//!
//! Empty datasets and categories without matches are not errors: the
//! reporting layer handles them with a message and an early return. The
//! variants below cover the failures that must reach the caller.

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for new expenses
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record store read/write errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export sink errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Check if this error came from reading or writing persisted data
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::Export(_) | Self::Io(_) | Self::Json(_) | Self::Csv(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
