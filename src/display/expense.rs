//! Expense display formatting
//!
//! Utilities for formatting expense records for terminal display.

use crate::models::Expense;

/// Format a single expense for display (table row)
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{:<12} {:10} {:>10} {:<20} {}",
        expense.id.to_string(),
        expense.date.format("%Y-%m-%d"),
        expense.amount.to_string(),
        truncate(expense.category.name(), 20),
        expense.description
    )
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[&Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:10} {:>10} {:<20} {}\n",
        "ID", "Date", "Amount", "Category", "Description"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum width, appending an ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
