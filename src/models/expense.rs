//! Expense model
//!
//! An `Expense` is one stored row of the record store. It is immutable once
//! the store has assigned its id; `NewExpense` is the normalized value handed
//! to the store for insertion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Identifier assigned by the record store
    pub id: ExpenseId,

    /// Day the money was spent
    pub date: NaiveDate,

    pub description: String,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Category label, stored lowercase
    pub category: String,

    /// ISO-4217 style currency code, stored uppercase
    pub currency: String,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category,
            self.currency
        )
    }
}

/// A normalized expense that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub category: String,
    pub currency: String,
}

impl NewExpense {
    /// Create a new expense, trimming text fields, lowercasing the category
    /// and uppercasing the currency code
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Money,
        category: impl AsRef<str>,
        currency: impl AsRef<str>,
    ) -> Self {
        Self {
            date,
            description: description.into().trim().to_string(),
            amount,
            category: normalize_category(category.as_ref()),
            currency: currency.as_ref().trim().to_uppercase(),
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        if self.amount > Money::MAX_EXPENSE {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        if self.category.is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        let currency_ok =
            self.currency.len() == 3 && self.currency.chars().all(|c| c.is_ascii_uppercase());
        if !currency_ok {
            return Err(ExpenseValidationError::InvalidCurrency(
                self.currency.clone(),
            ));
        }

        Ok(())
    }

    /// Attach the id assigned by the store
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            date: self.date,
            description: self.description,
            amount: self.amount,
            category: self.category,
            currency: self.currency,
            created_at: Utc::now(),
        }
    }
}

/// Canonical form of a category label used for storage and comparison
pub fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Validation errors for new expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    EmptyCategory,
    NegativeAmount(Money),
    AmountTooLarge(Money),
    InvalidCurrency(String),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Expense amount {} exceeds the limit of {}",
                amount,
                Money::MAX_EXPENSE
            ),
            Self::InvalidCurrency(code) => {
                write!(f, "Currency must be a three-letter code, got '{}'", code)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
