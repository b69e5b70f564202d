//! Expense tracker - record personal expenses and report on them
//!
//! This library provides the core functionality for the `expenses` binary:
//! a durable store of expense records and a set of reports computed from a
//! tabular view of that store.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, ids)
//! - `storage`: The record store contract and its JSON file implementation
//! - `reports`: The expense table and the reports built from it
//! - `export`: CSV and JSON export sinks
//! - `services`: Validation and reporting on top of the store
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::paths::ExpensePaths;
//! use expense_tracker::services::ReportService;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::open(ExpensePaths::new()?)?;
//! ReportService::new(&storage.expenses).summarize_by_category(&mut std::io::stdout())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
