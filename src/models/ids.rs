//! Strongly-typed identifier for stored expenses
//!
//! Ids are assigned by the record store, start at 1, and are never reused.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// The id handed out for the first expense in an empty store
    pub const FIRST: ExpenseId = ExpenseId(1);

    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The id following this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
