//! Expense record model
//!
//! A single recorded financial outflow. Records are validated at
//! construction and never mutated afterwards; corrections are modeled as
//! remove-then-add.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned on creation and immutable
    pub id: ExpenseId,

    /// Date the expense occurred
    pub date: NaiveDate,

    /// Amount spent (strictly positive)
    pub amount: Money,

    /// Category label
    pub category: Category,

    /// Optional free-text description
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create a new expense with a freshly assigned identifier
    ///
    /// Fails if the amount is not strictly positive. The category is already
    /// validated by [`Category::parse`]; the date is valid by construction
    /// (`NaiveDate`).
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: Category,
        description: impl Into<String>,
    ) -> Result<Self, ExpenseValidationError> {
        if !amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(amount));
        }

        let description: String = description.into();

        Ok(Self {
            id: ExpenseId::new(),
            date,
            amount,
            category,
            description: description.trim().to_string(),
        })
    }

    /// Re-check invariants on a record that bypassed the constructor
    /// (deserialized from disk or an import file)
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.category.name().trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.date.format("%Y-%m-%d"),
            self.amount,
            self.category,
            self.description
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyCategory,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

impl From<ExpenseValidationError> for crate::error::TrackerError {
    fn from(err: ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food() -> Category {
        Category::parse("food").unwrap()
    }

    #[test]
    fn test_new_expense() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let expense = Expense::new(date, Money::from_cents(5000), food(), "groceries").unwrap();

        assert_eq!(expense.date, date);
        assert_eq!(expense.amount.cents(), 5000);
        assert_eq!(expense.category.name(), "food");
        assert_eq!(expense.description, "groceries");
    }

    #[test]
    fn test_description_trimmed() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let expense = Expense::new(date, Money::from_cents(100), food(), "  lunch  ").unwrap();
        assert_eq!(expense.description, "lunch");
    }

    #[test]
    fn test_zero_amount_rejected() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let result = Expense::new(date, Money::zero(), food(), "");
        assert_eq!(
            result,
            Err(ExpenseValidationError::NonPositiveAmount(Money::zero()))
        );
    }

    #[test]
    fn test_negative_amount_rejected() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let result = Expense::new(date, Money::from_cents(-100), food(), "");
        assert!(matches!(
            result,
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_unique_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let a = Expense::new(date, Money::from_cents(100), food(), "").unwrap();
        let b = Expense::new(date, Money::from_cents(100), food(), "").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialization_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let expense = Expense::new(date, Money::from_cents(5000), food(), "groceries").unwrap();

        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }

    #[test]
    fn test_validate_deserialized_record() {
        // A record with a non-positive amount can arrive via deserialization
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2024-01-05",
            "amount": -100,
            "category": "food",
            "description": ""
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.validate().is_err());
    }

    #[test]
    fn test_display() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let expense = Expense::new(date, Money::from_cents(5000), food(), "groceries").unwrap();
        assert_eq!(format!("{}", expense), "2024-01-05 | $50.00 | food | groceries");
    }
}
