//! Budget comparison reporting
//!
//! Compares actual spending against budget limits. Budgets are reporting
//! baselines only; nothing here (or anywhere else) rejects an over-budget
//! expense.

use crate::models::{Budget, BudgetScope, Expense, Money, Month};

/// Actual spending measured against one budget
#[derive(Debug, Clone)]
pub struct BudgetComparison {
    /// The budget's scope
    pub scope: BudgetScope,
    /// The budget's month
    pub month: Month,
    /// The configured limit
    pub limit: Money,
    /// Actual spending for the scope and month
    pub actual: Money,
    /// Signed difference: limit - actual (negative = over budget)
    pub remaining: Money,
}

impl BudgetComparison {
    /// Compare actual spending in the budget's scope and month to its limit
    pub fn compute(budget: &Budget, expenses: &[Expense]) -> Self {
        let actual: Money = expenses
            .iter()
            .filter(|e| budget.month.contains(e.date))
            .filter(|e| match &budget.scope {
                BudgetScope::Category(category) => category.matches(e.category.name()),
                BudgetScope::Overall => true,
            })
            .map(|e| e.amount)
            .sum();

        Self {
            scope: budget.scope.clone(),
            month: budget.month,
            limit: budget.limit,
            actual,
            remaining: budget.limit - actual,
        }
    }

    /// Whether spending exceeded the limit
    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }

    /// Spending as a percentage of the limit (0 when the limit is zero)
    pub fn percent_used(&self) -> f64 {
        if self.limit.is_zero() {
            0.0
        } else {
            (self.actual.cents() as f64 / self.limit.cents() as f64) * 100.0
        }
    }
}

/// Budget status for every budget covering one month
#[derive(Debug, Clone)]
pub struct BudgetStatusReport {
    /// The reported month
    pub month: Month,
    /// One comparison per budget
    pub rows: Vec<BudgetComparison>,
}

impl BudgetStatusReport {
    /// Generate the status of all budgets for the given month
    pub fn generate(budgets: &[Budget], expenses: &[Expense], month: Month) -> Self {
        let rows = budgets
            .iter()
            .filter(|b| b.month == month)
            .map(|b| BudgetComparison::compute(b, expenses))
            .collect();

        Self { month, rows }
    }

    /// Whether no budgets cover the month
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return format!("No budgets set for {}.\n", self.month);
        }

        let mut output = String::new();
        output.push_str(&format!("BUDGET STATUS - {}\n", self.month));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>10} {:>10} {:>10} {:>7}\n",
            "Scope", "Limit", "Spent", "Remaining", "Used"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>10} {:>10} {:>10} {:>6.1}%\n",
                row.scope.to_string(),
                row.limit.to_string(),
                row.actual.to_string(),
                row.remaining.to_string(),
                row.percent_used()
            ));
        }

        output
    }
}
