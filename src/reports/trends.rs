//! Monthly spending trends
//!
//! Aggregates spending by calendar month, either over the whole record set
//! or over a trailing window relative to a reference date.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Expense, Money, Month};

/// Sum of amounts per calendar month
///
/// Each record's date is truncated to its month; months with no expenses are
/// absent from the map.
pub fn totals_by_month(expenses: &[Expense]) -> BTreeMap<Month, Money> {
    let mut totals: BTreeMap<Month, Money> = BTreeMap::new();

    for expense in expenses {
        *totals
            .entry(Month::from_date(expense.date))
            .or_insert_with(Money::zero) += expense.amount;
    }

    totals
}

/// Spending trend over the trailing months
#[derive(Debug, Clone)]
pub struct TrendReport {
    /// First month of the window (inclusive)
    pub start: Month,
    /// Last month of the window (inclusive)
    pub end: Month,
    /// Months with spending inside the window, oldest first
    pub months: Vec<(Month, Money)>,
}

impl TrendReport {
    /// Generate a trend over the `window` months ending at `reference`
    pub fn generate(expenses: &[Expense], window: usize, reference: NaiveDate) -> Self {
        let end = Month::from_date(reference);
        let mut start = end;
        for _ in 1..window.max(1) {
            start = start.prev();
        }

        let months = totals_by_month(expenses)
            .into_iter()
            .filter(|(month, _)| *month >= start && *month <= end)
            .collect();

        Self { start, end, months }
    }

    /// Whether the window contains no spending
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No expenses in the selected period.\n".to_string();
        }

        let mut output = String::new();
        output.push_str(&format!("EXPENSE TRENDS - {} to {}\n", self.start, self.end));
        output.push_str(&"=".repeat(50));
        output.push('\n');

        for (month, total) in &self.months {
            output.push_str(&format!("{}: {}\n", month, total));
        }

        output
    }
}
