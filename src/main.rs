use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_backup_command, handle_budget_command, handle_expense_command, handle_export,
    handle_import, handle_report_command, BackupCommands, BudgetCommands, ExpenseCommands,
    ExportFormat, ReportCommands,
};
use spendlog::config::{paths::TrackerPaths, settings::Settings};
use spendlog::manager::ExpenseManager;
use spendlog::storage::FileHandler;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based personal expense tracking",
    long_about = "spendlog records, categorizes, and reports on personal \
                  expenses from the command line. Data is stored as JSON with \
                  timestamped backups, and can be exported to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Report commands
    #[command(subcommand)]
    Report(ReportCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Export expenses to a file
    Export {
        /// Destination file
        file: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Import expenses from a CSV file
    Import {
        /// Source CSV file
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage and load data; a missing data file is a fresh start
    let file_handler = FileHandler::new(&paths)?;
    let mut manager = if file_handler.data_file_exists() {
        ExpenseManager::from_expenses(file_handler.load()?)
    } else {
        ExpenseManager::new()
    };
    let mut budgets = file_handler.load_budgets()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&mut manager, &file_handler, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&manager, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut budgets, &manager, &file_handler, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&mut manager, &file_handler, &settings, cmd)?;
        }
        Some(Commands::Export { file, format }) => {
            handle_export(&manager, &file_handler, file, format)?;
        }
        Some(Commands::Import { file }) => {
            handle_import(&mut manager, &file_handler, file)?;
        }
        Some(Commands::Config) => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data file:        {}", paths.expenses_file().display());
            println!("Budgets file:     {}", paths.budgets_file().display());
            println!("Backup directory: {}", paths.backup_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!(
                "  Backup retention: {} backups",
                settings.backup_retention.max_count
            );
        }
        None => {
            println!("spendlog - Terminal-based personal expense tracking");
            println!();
            println!("Run 'spendlog --help' for usage information.");
            println!("Run 'spendlog expense add 12.50 \"Food & Dining\"' to record an expense.");
        }
    }

    Ok(())
}
