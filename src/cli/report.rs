//! CLI commands for reports

use std::io;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::services::ReportService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total spending per category, largest first
    #[command(alias = "categories")]
    Summary,

    /// Expenses of a single category
    Filter {
        /// Category name (case-insensitive)
        category: String,
    },

    /// Descriptive statistics of expense amounts
    #[command(alias = "statistics")]
    Stats,
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> ExpenseResult<()> {
    let service = ReportService::new(&storage.expenses)
        .with_currency_symbol(settings.currency_symbol.clone());
    let mut out = io::stdout().lock();

    match cmd {
        ReportCommands::Summary => {
            service.summarize_by_category(&mut out)?;
        }
        ReportCommands::Filter { category } => {
            service.filter_by_category(&category, &mut out)?;
        }
        ReportCommands::Stats => {
            service.summary_statistics(&mut out)?;
        }
    }

    Ok(())
}
