//! In-memory expense collection
//!
//! [`ExpenseManager`] exclusively owns the expense records for a session and
//! keeps them in insertion order. Persistence is handled separately by the
//! storage layer; reports read snapshots through [`ExpenseManager::all`].

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, ExpenseId, Money};

/// Criteria for selecting expenses
///
/// All fields are optional; an empty filter matches every record.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Earliest date (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Latest date (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Category to match (case-insensitive)
    pub category: Option<Category>,
    /// Smallest amount (inclusive)
    pub min_amount: Option<Money>,
    /// Largest amount (inclusive)
    pub max_amount: Option<Money>,
}

impl ExpenseFilter {
    /// Create an empty filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to dates on or after `date`
    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Restrict to dates on or before `date`
    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Restrict to a single category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Restrict to amounts of at least `amount`
    pub fn min_amount(mut self, amount: Money) -> Self {
        self.min_amount = Some(amount);
        self
    }

    /// Restrict to amounts of at most `amount`
    pub fn max_amount(mut self, amount: Money) -> Self {
        self.max_amount = Some(amount);
        self
    }

    /// Check whether an expense satisfies every set criterion
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(start) = self.start_date {
            if expense.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if expense.date > end {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !category.matches(expense.category.name()) {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if expense.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if expense.amount > max {
                return false;
            }
        }
        true
    }
}

/// Owns the in-memory collection of expense records
#[derive(Debug, Default)]
pub struct ExpenseManager {
    expenses: Vec<Expense>,
}

impl ExpenseManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager from already-validated records (load/restore paths)
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Append an expense
    ///
    /// Never fails for a validly constructed [`Expense`]; insertion order is
    /// retained for display.
    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Bulk-append records (CSV import path)
    pub fn extend(&mut self, expenses: Vec<Expense>) {
        self.expenses.extend(expenses);
    }

    /// Replace the whole collection (restore path), discarding current state
    pub fn replace_all(&mut self, expenses: Vec<Expense>) {
        self.expenses = expenses;
    }

    /// Remove an expense by id, returning the removed record
    pub fn remove(&mut self, id: ExpenseId) -> TrackerResult<Expense> {
        let position = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;
        Ok(self.expenses.remove(position))
    }

    /// Look up an expense by id
    pub fn find(&self, id: ExpenseId) -> TrackerResult<&Expense> {
        self.expenses
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))
    }

    /// Iterate over expenses matching a filter, in insertion order
    ///
    /// The iterator is lazy and borrows the collection; re-invoking the
    /// method restarts the traversal. An empty result is not an error.
    pub fn filter<'a>(
        &'a self,
        filter: &'a ExpenseFilter,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses.iter().filter(move |e| filter.matches(e))
    }

    /// Case-insensitive substring search over description and category
    pub fn search(&self, query: &str) -> Vec<&Expense> {
        let query = query.to_lowercase();
        self.expenses
            .iter()
            .filter(|e| {
                e.description.to_lowercase().contains(&query)
                    || e.category.name().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// The full ordered read view
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(date: (i32, u32, u32), cents: i64, category: &str, description: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            Money::from_cents(cents),
            Category::parse(category).unwrap(),
            description,
        )
        .unwrap()
    }

    fn sample_manager() -> ExpenseManager {
        let mut manager = ExpenseManager::new();
        manager.add(expense((2024, 1, 5), 5000, "food", "groceries"));
        manager.add(expense((2024, 1, 20), 3000, "food", "dinner out"));
        manager.add(expense((2024, 2, 1), 10000, "transport", "train pass"));
        manager
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let manager = sample_manager();
        let descriptions: Vec<_> = manager.all().iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["groceries", "dinner out", "train pass"]);
    }

    #[test]
    fn test_find() {
        let manager = sample_manager();
        let id = manager.all()[1].id;
        assert_eq!(manager.find(id).unwrap().description, "dinner out");
    }

    #[test]
    fn test_find_missing() {
        let manager = sample_manager();
        let err = manager.find(ExpenseId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove() {
        let mut manager = sample_manager();
        let id = manager.all()[0].id;

        let removed = manager.remove(id).unwrap();
        assert_eq!(removed.description, "groceries");
        assert_eq!(manager.len(), 2);
        assert!(manager.find(id).is_err());
    }

    #[test]
    fn test_remove_missing_leaves_collection_unchanged() {
        let mut manager = sample_manager();
        let before: Vec<_> = manager.all().to_vec();

        let err = manager.remove(ExpenseId::new()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(manager.all(), before.as_slice());
    }

    #[test]
    fn test_filter_by_category() {
        let manager = sample_manager();
        let filter = ExpenseFilter::new().category(Category::parse("food").unwrap());

        let matched: Vec<_> = manager.filter(&filter).collect();
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|e| e.category.name() == "food"));
    }

    #[test]
    fn test_filter_by_date_range() {
        let manager = sample_manager();
        let filter = ExpenseFilter::new()
            .from_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
            .to_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        let matched: Vec<_> = manager.filter(&filter).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].description, "dinner out");
    }

    #[test]
    fn test_filter_by_amount_range() {
        let manager = sample_manager();
        let filter = ExpenseFilter::new()
            .min_amount(Money::from_cents(4000))
            .max_amount(Money::from_cents(11000));

        let matched: Vec<_> = manager.filter(&filter).collect();
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_filter_no_matches_is_empty_not_error() {
        let manager = sample_manager();
        let filter = ExpenseFilter::new().category(Category::parse("Healthcare").unwrap());
        assert_eq!(manager.filter(&filter).count(), 0);
    }

    #[test]
    fn test_filter_is_restartable() {
        let manager = sample_manager();
        let filter = ExpenseFilter::new().category(Category::parse("food").unwrap());

        assert_eq!(manager.filter(&filter).count(), 2);
        assert_eq!(manager.filter(&filter).count(), 2);
    }

    #[test]
    fn test_search() {
        let manager = sample_manager();

        let by_description = manager.search("GROC");
        assert_eq!(by_description.len(), 1);

        let by_category = manager.search("transport");
        assert_eq!(by_category.len(), 1);
        assert_eq!(by_category[0].description, "train pass");

        assert!(manager.search("yacht").is_empty());
    }

    #[test]
    fn test_replace_all() {
        let mut manager = sample_manager();
        manager.replace_all(vec![expense((2025, 3, 1), 100, "Other", "reset")]);

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.all()[0].description, "reset");
    }
}
