//! Budget model
//!
//! A budget is a comparison baseline for actual spend in a category (or
//! overall) during a month. It is informational only: expenses that exceed a
//! budget are reported, never rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::month::Month;

/// What a budget applies to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "category", rename_all = "lowercase")]
pub enum BudgetScope {
    /// A single category
    Category(Category),
    /// All spending in the period
    Overall,
}

impl fmt::Display for BudgetScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category(category) => write!(f, "{}", category),
            Self::Overall => write!(f, "Overall"),
        }
    }
}

/// A spending limit for a scope and month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Category or overall
    pub scope: BudgetScope,

    /// The month the limit applies to
    pub month: Month,

    /// The limit amount (non-negative)
    pub limit: Money,
}

impl Budget {
    /// Create a budget, rejecting negative limits
    pub fn new(scope: BudgetScope, month: Month, limit: Money) -> Result<Self, BudgetValidationError> {
        if limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit(limit));
        }

        Ok(Self {
            scope,
            month,
            limit,
        })
    }

    /// Check whether this budget covers the given scope and month
    pub fn covers(&self, scope: &BudgetScope, month: Month) -> bool {
        self.scope == *scope && self.month == month
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month, self.scope, self.limit)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeLimit(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLimit(limit) => {
                write!(f, "Budget limit cannot be negative, got {}", limit)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}

impl From<BudgetValidationError> for crate::error::TrackerError {
    fn from(err: BudgetValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month() -> Month {
        Month::new(2024, 1).unwrap()
    }

    #[test]
    fn test_new_budget() {
        let scope = BudgetScope::Category(Category::parse("food").unwrap());
        let budget = Budget::new(scope.clone(), month(), Money::from_cents(20000)).unwrap();

        assert_eq!(budget.scope, scope);
        assert_eq!(budget.limit.cents(), 20000);
    }

    #[test]
    fn test_zero_limit_allowed() {
        let budget = Budget::new(BudgetScope::Overall, month(), Money::zero());
        assert!(budget.is_ok());
    }

    #[test]
    fn test_negative_limit_rejected() {
        let result = Budget::new(BudgetScope::Overall, month(), Money::from_cents(-1));
        assert!(matches!(result, Err(BudgetValidationError::NegativeLimit(_))));
    }

    #[test]
    fn test_covers() {
        let scope = BudgetScope::Category(Category::parse("food").unwrap());
        let budget = Budget::new(scope.clone(), month(), Money::from_cents(20000)).unwrap();

        assert!(budget.covers(&scope, month()));
        assert!(!budget.covers(&BudgetScope::Overall, month()));
        assert!(!budget.covers(&scope, month().next()));
    }

    #[test]
    fn test_serialization_round_trip() {
        let scope = BudgetScope::Category(Category::parse("Travel").unwrap());
        let budget = Budget::new(scope, month(), Money::from_cents(50000)).unwrap();

        let json = serde_json::to_string(&budget).unwrap();
        let deserialized: Budget = serde_json::from_str(&json).unwrap();
        assert_eq!(budget, deserialized);
    }
}
