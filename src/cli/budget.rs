//! Budget CLI commands
//!
//! Budgets are comparison baselines; setting one never blocks expenses.

use clap::Subcommand;

use super::expense::parse_amount;
use crate::error::{TrackerError, TrackerResult};
use crate::manager::ExpenseManager;
use crate::models::{Budget, BudgetScope, Category, Month};
use crate::reports::{BudgetComparison, BudgetStatusReport};
use crate::storage::FileHandler;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set or replace a budget for a month
    Set {
        /// The month the budget applies to (YYYY-MM)
        month: String,
        /// Limit amount (e.g., "200.00")
        limit: String,
        /// Category the budget applies to; omit for an overall budget
        #[arg(short = 'C', long)]
        category: Option<String>,
    },
    /// Show budget status for a month
    Status {
        /// The month to report (YYYY-MM)
        month: String,
    },
    /// List all budgets
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    budgets: &mut Vec<Budget>,
    manager: &ExpenseManager,
    file_handler: &FileHandler,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Set {
            month,
            limit,
            category,
        } => {
            let month = Month::parse(&month)
                .map_err(|e| TrackerError::Validation(e.to_string()))?;
            let limit = parse_amount(&limit)?;

            let scope = match category {
                Some(name) => BudgetScope::Category(
                    Category::parse(&name)
                        .map_err(|e| TrackerError::Validation(e.to_string()))?,
                ),
                None => BudgetScope::Overall,
            };

            let budget = Budget::new(scope.clone(), month, limit)?;

            // Replace any existing budget for the same scope and month
            budgets.retain(|b| !b.covers(&scope, month));
            budgets.push(budget.clone());
            file_handler.save_budgets(budgets)?;

            println!("Budget set: {}", budget);

            let comparison = BudgetComparison::compute(&budget, manager.all());
            println!(
                "Current status: {} spent, {} remaining ({:.1}%)",
                comparison.actual,
                comparison.remaining,
                comparison.percent_used()
            );
        }

        BudgetCommands::Status { month } => {
            let month = Month::parse(&month)
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            let report = BudgetStatusReport::generate(budgets, manager.all(), month);
            print!("{}", report.format_terminal());
        }

        BudgetCommands::List => {
            if budgets.is_empty() {
                println!("No budgets set.");
            } else {
                for budget in budgets.iter() {
                    println!("{}", budget);
                }
            }
        }
    }

    Ok(())
}
