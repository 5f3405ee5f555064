//! Summary statistics over the expense collection

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};

use super::spending::totals_by_category;

/// Basic statistics over the full record set
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Number of expenses
    pub count: usize,
    /// Sum of all amounts
    pub total: Money,
    /// Mean amount, rounded to the nearest cent
    pub mean: Money,
    /// Smallest amount
    pub min: Money,
    /// Largest amount
    pub max: Money,
    /// Category with the highest total spend
    pub top_category: (String, Money),
}

impl Statistics {
    /// Compute statistics over the collection
    ///
    /// Fails with an `EmptyData` error when the collection is empty; callers
    /// that want a softer behavior check `is_empty` first.
    pub fn compute(expenses: &[Expense]) -> TrackerResult<Self> {
        if expenses.is_empty() {
            return Err(TrackerError::EmptyData(
                "no expenses to analyze".to_string(),
            ));
        }

        let count = expenses.len();
        let total: Money = expenses.iter().map(|e| e.amount).sum();
        let min = expenses
            .iter()
            .map(|e| e.amount)
            .min()
            .unwrap_or_else(Money::zero);
        let max = expenses
            .iter()
            .map(|e| e.amount)
            .max()
            .unwrap_or_else(Money::zero);

        // Round half-up to the nearest cent; all amounts are positive
        let mean = Money::from_cents((total.cents() + count as i64 / 2) / count as i64);

        let top_category = totals_by_category(expenses)
            .into_iter()
            .max_by_key(|(_, total)| *total)
            .unwrap_or_else(|| (String::new(), Money::zero()));

        Ok(Self {
            count,
            total,
            mean,
            min,
            max,
            top_category,
        })
    }

    /// Format the statistics for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();
        output.push_str("EXPENSE STATISTICS\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("Total Expenses: {}\n", self.count));
        output.push_str(&format!("Total Amount: {}\n", self.total));
        output.push_str(&format!("Average Expense: {}\n", self.mean));
        output.push_str(&format!("Largest Expense: {}\n", self.max));
        output.push_str(&format!("Smallest Expense: {}\n", self.min));
        output.push_str(&format!(
            "Top Category: {} ({})\n",
            self.top_category.0, self.top_category.1
        ));
        output
    }
}
