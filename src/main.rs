use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add_command, handle_export_command, handle_import_command, handle_list_command,
    handle_report_command, AddArgs, ExportArgs, ReportCommands,
};
use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
use expense_tracker::display::separator;
use expense_tracker::export::CsvExporter;
use expense_tracker::services::ReportService;
use expense_tracker::storage::Storage;

/// Environment variable holding the log filter
const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track personal expenses and report on them",
    long_about = "Record expenses with a date, description, amount, category and \
                  currency, then list them, total them by category, filter one \
                  category, describe the amounts statistically or export them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List every recorded expense
    #[command(alias = "ls")]
    List,

    /// Reports over the recorded expenses
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export all expenses to a file
    Export(ExportArgs),

    /// Import expenses from a CSV file in the export layout
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Run the list, summary, statistics and export steps in order
    Demo,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // The store is released when `storage` leaves scope
    let storage = Storage::open(paths.clone())?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::List) => handle_list_command(&storage, &settings)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, &settings, args)?,
        Some(Commands::Import { file }) => handle_import_command(&storage, &settings, file)?,
        Some(Commands::Demo) => run_demo(&storage, &settings)?,
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Expenses file:    {}", paths.expenses_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Store created:    {}", storage.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Export file name: {}", settings.export_filename);
        }
        None => {
            println!("Expense Tracker - personal expense records and reports");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses demo' to see every report at once.");
        }
    }

    Ok(())
}

fn run_demo(storage: &Storage, settings: &Settings) -> Result<()> {
    let service = ReportService::new(&storage.expenses)
        .with_currency_symbol(settings.currency_symbol.clone());
    let mut out = io::stdout().lock();

    writeln!(out, "{}", separator('=', 100))?;
    writeln!(out, "EXPENSE TRACKER")?;
    writeln!(out, "{}", separator('=', 100))?;

    service.list_all(&mut out)?;
    service.summarize_by_category(&mut out)?;
    service.summary_statistics(&mut out)?;
    service.export(
        &CsvExporter,
        &PathBuf::from(&settings.export_filename),
        &mut out,
    )?;

    Ok(())
}
