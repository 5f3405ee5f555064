//! Monthly expense report
//!
//! Totals and category breakdown for a single calendar month, with the most
//! recent expenses listed for context.

use std::collections::BTreeMap;

use super::spending::{percentage_of, CategoryTotal};
use crate::models::{Expense, Money, Month};

/// How many recent expenses the report lists
const RECENT_LIMIT: usize = 10;

/// Expense report for one month
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    /// The reported month
    pub month: Month,
    /// Total spending in the month
    pub total: Money,
    /// Per-category totals, sorted by category name
    pub categories: Vec<CategoryTotal>,
    /// Most recent expenses in the month, newest first (up to 10)
    pub recent: Vec<Expense>,
}

impl MonthlyReport {
    /// Generate a report for the given month
    pub fn generate(expenses: &[Expense], month: Month) -> Self {
        let in_month: Vec<&Expense> = expenses
            .iter()
            .filter(|e| month.contains(e.date))
            .collect();

        let mut per_category: BTreeMap<String, (Money, usize)> = BTreeMap::new();
        let mut total = Money::zero();

        for expense in &in_month {
            let entry = per_category
                .entry(expense.category.name().to_string())
                .or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
            total += expense.amount;
        }

        let categories = per_category
            .into_iter()
            .map(|(category, (category_total, count))| CategoryTotal {
                category,
                total: category_total,
                count,
                percentage: percentage_of(category_total, total),
            })
            .collect();

        let mut recent: Vec<Expense> = in_month.into_iter().cloned().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        recent.truncate(RECENT_LIMIT);

        Self {
            month,
            total,
            categories,
            recent,
        }
    }

    /// Whether the month has no expenses
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return format!("No expenses found for {}.\n", self.month);
        }

        let mut output = String::new();
        output.push_str(&format!("MONTHLY REPORT - {}\n", self.month));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("Total Expenses: {}\n\n", self.total));

        output.push_str("Category Breakdown:\n");
        output.push_str(&"-".repeat(30));
        output.push('\n');
        for row in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>10} ({:>5.1}%)\n",
                row.category,
                row.total.to_string(),
                row.percentage
            ));
        }

        output.push_str("\nRecent Expenses:\n");
        output.push_str(&"-".repeat(50));
        output.push('\n');
        for expense in &self.recent {
            output.push_str(&format!("{}\n", expense));
        }

        output
    }
}
