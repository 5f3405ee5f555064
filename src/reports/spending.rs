//! Category spending aggregation
//!
//! Pure functions over a snapshot of expense records; no mutation, no I/O.

use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Sum of amounts per category
///
/// Categories with no expenses are absent from the map, not present with a
/// zero value.
pub fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, Money> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();

    for expense in expenses {
        *totals
            .entry(expense.category.name().to_string())
            .or_insert_with(Money::zero) += expense.amount;
    }

    totals
}

/// Spending for a single category
#[derive(Debug, Clone)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of amounts
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of the grand total
    pub percentage: f64,
}

/// Overall category breakdown report
#[derive(Debug, Clone)]
pub struct CategoryBreakdownReport {
    /// Per-category totals, sorted by category name
    pub categories: Vec<CategoryTotal>,
    /// Grand total across all categories
    pub total: Money,
}

impl CategoryBreakdownReport {
    /// Generate a breakdown over the full record set
    pub fn generate(expenses: &[Expense]) -> Self {
        let mut per_category: BTreeMap<String, (Money, usize)> = BTreeMap::new();
        let mut total = Money::zero();

        for expense in expenses {
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

        Self { categories, total }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.categories.is_empty() {
            return "No expenses to analyze.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("OVERALL CATEGORY BREAKDOWN\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("Total Expenses: {}\n\n", self.total));

        for row in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>10} ({:>5.1}%)\n",
                row.category,
                row.total.to_string(),
                row.percentage
            ));
        }

        output
    }
}

/// Share of `part` in `total`, as a percentage
pub(crate) fn percentage_of(part: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        (part.cents() as f64 / total.cents() as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;

    fn expense(date: (i32, u32, u32), cents: i64, category: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Money::from_cents(cents),
            Category::parse(category).unwrap(),
            "",
        )
        .unwrap()
    }

    #[test]
    fn test_totals_by_category() {
        let expenses = vec![
            expense((2024, 1, 5), 5000, "food"),
            expense((2024, 1, 20), 3000, "food"),
            expense((2024, 2, 1), 10000, "transport"),
        ];

        let totals = totals_by_category(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["food"].cents(), 8000);
        assert_eq!(totals["transport"].cents(), 10000);
    }

    #[test]
    fn test_empty_categories_absent() {
        let totals = totals_by_category(&[]);
        assert!(totals.is_empty());
    }

    #[test]
    fn test_totals_sum_to_per_category_amounts() {
        // Three categories with two expenses each
        let expenses = vec![
            expense((2024, 1, 1), 100, "a"),
            expense((2024, 1, 2), 200, "a"),
            expense((2024, 1, 3), 300, "b"),
            expense((2024, 1, 4), 400, "b"),
            expense((2024, 1, 5), 500, "c"),
            expense((2024, 1, 6), 600, "c"),
        ];

        let totals = totals_by_category(&expenses);
        assert_eq!(totals["a"].cents(), 300);
        assert_eq!(totals["b"].cents(), 700);
        assert_eq!(totals["c"].cents(), 1100);
    }

    #[test]
    fn test_breakdown_report() {
        let expenses = vec![
            expense((2024, 1, 5), 7500, "food"),
            expense((2024, 1, 20), 2500, "transport"),
        ];

        let report = CategoryBreakdownReport::generate(&expenses);
        assert_eq!(report.total.cents(), 10000);
        assert_eq!(report.categories.len(), 2);

        let food = &report.categories[0];
        assert_eq!(food.category, "food");
        assert_eq!(food.count, 1);
        assert!((food.percentage - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_breakdown_report_empty() {
        let report = CategoryBreakdownReport::generate(&[]);
        assert!(report.categories.is_empty());
        assert!(report.format_terminal().contains("No expenses"));
    }
}
