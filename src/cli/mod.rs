//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod report;

pub use expense::{handle_add_command, handle_import_command, handle_list_command, AddArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use report::{handle_report_command, ReportCommands};
