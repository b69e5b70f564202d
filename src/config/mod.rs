//! Configuration module for the expense tracker
//!
//! - Data-directory resolution (environment override, XDG default)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
