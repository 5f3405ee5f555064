//! Report CLI commands

use clap::Subcommand;

use super::expense::parse_date_or_today;
use crate::error::{TrackerError, TrackerResult};
use crate::manager::ExpenseManager;
use crate::models::Month;
use crate::reports::{CategoryBreakdownReport, MonthlyReport, Statistics, TrendReport};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly expense report
    Month {
        /// The month to report (YYYY-MM)
        month: String,
    },
    /// Overall category breakdown
    Categories,
    /// Monthly spending trend
    Trends {
        /// Number of trailing months to include
        #[arg(short, long, default_value = "6")]
        months: usize,
        /// Reference date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Summary statistics
    Stats,
}

/// Handle a report command
pub fn handle_report_command(manager: &ExpenseManager, cmd: ReportCommands) -> TrackerResult<()> {
    match cmd {
        ReportCommands::Month { month } => {
            let month = Month::parse(&month)
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            let report = MonthlyReport::generate(manager.all(), month);
            print!("{}", report.format_terminal());
        }

        ReportCommands::Categories => {
            let report = CategoryBreakdownReport::generate(manager.all());
            print!("{}", report.format_terminal());
        }

        ReportCommands::Trends { months, as_of } => {
            let reference = parse_date_or_today(as_of.as_deref())?;
            let report = TrendReport::generate(manager.all(), months, reference);
            print!("{}", report.format_terminal());
        }

        ReportCommands::Stats => match Statistics::compute(manager.all()) {
            Ok(stats) => print!("{}", stats.format_terminal()),
            Err(TrackerError::EmptyData(_)) => println!("No expenses recorded yet."),
            Err(e) => return Err(e),
        },
    }

    Ok(())
}
