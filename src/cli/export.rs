//! CLI command for exporting the expense table

use std::io;
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::settings::Settings;
use crate::error::ExpenseResult;
use crate::export::{CsvExporter, ExportSink, JsonExporter};
use crate::services::ReportService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, opens in any spreadsheet
    #[default]
    Csv,
    /// JSON array of expense rows
    Json,
}

impl ExportFormat {
    /// Sink that writes this format
    pub fn sink(self) -> Box<dyn ExportSink> {
        match self {
            Self::Csv => Box::new(CsvExporter),
            Self::Json => Box::new(JsonExporter),
        }
    }
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path, defaults to the configured export file name
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,
}

/// Handle `export`
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> ExpenseResult<()> {
    let destination = args
        .output
        .unwrap_or_else(|| PathBuf::from(&settings.export_filename));
    let sink = args.format.sink();

    ReportService::new(&storage.expenses).export(
        sink.as_ref(),
        &destination,
        &mut io::stdout().lock(),
    )?;
    Ok(())
}
