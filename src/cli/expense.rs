//! Expense CLI commands
//!
//! Implements the add/list/remove/search commands. All user input is parsed
//! into typed values here, at the boundary, before it reaches the core.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::format_expense_table;
use crate::error::{TrackerError, TrackerResult};
use crate::manager::{ExpenseFilter, ExpenseManager};
use crate::models::{Category, Expense, ExpenseId, Money, DEFAULT_CATEGORIES};
use crate::storage::FileHandler;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Amount (e.g., "50.00")
        amount: String,
        /// Category name
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List expenses, optionally filtered
    List {
        /// Filter by category name
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Smallest amount to include
        #[arg(long)]
        min: Option<String>,
        /// Largest amount to include
        #[arg(long)]
        max: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Remove an expense by id
    Remove {
        /// Expense id (full UUID or exp- prefixed)
        id: String,
    },
    /// Search expenses by description or category
    Search {
        /// Search term
        query: String,
    },
    /// List the default categories
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    manager: &mut ExpenseManager,
    file_handler: &FileHandler,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                TrackerError::Validation(format!(
                    "Invalid amount '{}'. Use a format like '50.00'. {}",
                    amount, e
                ))
            })?;

            let date = parse_date_or_today(date.as_deref())?;

            let category = Category::parse(&category)
                .map_err(|e| TrackerError::Validation(e.to_string()))?;

            let expense = Expense::new(date, amount, category, description.unwrap_or_default())?;

            println!("Added expense:");
            println!("  ID:       {}", expense.id);
            println!("  Date:     {}", expense.date);
            println!("  Amount:   {}", expense.amount);
            println!("  Category: {}", expense.category);
            if !expense.description.is_empty() {
                println!("  Note:     {}", expense.description);
            }

            manager.add(expense);
            file_handler.save(manager.all())?;
        }

        ExpenseCommands::List {
            category,
            from,
            to,
            min,
            max,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();

            if let Some(name) = &category {
                let category = Category::parse(name)
                    .map_err(|e| TrackerError::Validation(e.to_string()))?;
                filter = filter.category(category);
            }
            if let Some(from) = from {
                filter = filter.from_date(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter = filter.to_date(parse_date(&to)?);
            }
            if let Some(min) = min {
                filter = filter.min_amount(parse_amount(&min)?);
            }
            if let Some(max) = max {
                filter = filter.max_amount(parse_amount(&max)?);
            }

            let matched: Vec<_> = match limit {
                Some(limit) => manager.filter(&filter).take(limit).collect(),
                None => manager.filter(&filter).collect(),
            };

            print!("{}", format_expense_table(&matched));
            println!("{} expense(s)", matched.len());
        }

        ExpenseCommands::Remove { id } => {
            let id = resolve_expense_id(manager, &id)?;

            let removed = manager.remove(id)?;
            file_handler.save(manager.all())?;
            println!("Removed: {}", removed);
        }

        ExpenseCommands::Search { query } => {
            let results = manager.search(&query);
            if results.is_empty() {
                println!("No expenses found matching '{}'.", query);
            } else {
                print!("{}", format_expense_table(&results));
                println!("{} match(es)", results.len());
            }
        }

        ExpenseCommands::Categories => {
            println!("Default categories:");
            for category in DEFAULT_CATEGORIES {
                println!("  {}", category);
            }
            println!();
            println!("Custom category names are accepted as well.");
        }
    }

    Ok(())
}

/// Resolve a user-supplied id string to an expense id
///
/// Accepts the full UUID (with or without the `exp-` prefix) or a unique
/// prefix of it, which is what `expense list` displays.
fn resolve_expense_id(manager: &ExpenseManager, s: &str) -> TrackerResult<ExpenseId> {
    if let Ok(id) = s.parse::<ExpenseId>() {
        return Ok(id);
    }

    let prefix = s.strip_prefix("exp-").unwrap_or(s).to_lowercase();
    if prefix.is_empty() {
        return Err(TrackerError::Validation(format!(
            "Invalid expense id: '{}'",
            s
        )));
    }

    let matches: Vec<ExpenseId> = manager
        .all()
        .iter()
        .filter(|e| e.id.as_uuid().to_string().starts_with(&prefix))
        .map(|e| e.id)
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(TrackerError::expense_not_found(s)),
        _ => Err(TrackerError::Validation(format!(
            "Expense id prefix '{}' is ambiguous ({} matches)",
            s,
            matches.len()
        ))),
    }
}

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse an optional date argument, defaulting to today
pub(crate) fn parse_date_or_today(s: Option<&str>) -> TrackerResult<NaiveDate> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a money argument
pub(crate) fn parse_amount(s: &str) -> TrackerResult<Money> {
    Money::parse(s).map_err(|e| TrackerError::Validation(e.to_string()))
}
