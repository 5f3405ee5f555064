//! Expense category label
//!
//! Categories are short labels grouping expenses for aggregation. A default
//! set is provided; labels matching it case-insensitively are folded to the
//! canonical spelling, while novel non-empty labels are accepted as custom
//! categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The default category set offered by the application
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "Food & Dining",
    "Transportation",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Shopping",
    "Education",
    "Travel",
    "Other",
];

/// A validated expense category label
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Parse a category label
    ///
    /// Trims surrounding whitespace and rejects empty labels. Labels matching
    /// one of [`DEFAULT_CATEGORIES`] case-insensitively are canonicalized.
    pub fn parse(s: &str) -> Result<Self, CategoryParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CategoryParseError::Empty);
        }

        for canonical in DEFAULT_CATEGORIES {
            if canonical.eq_ignore_ascii_case(trimmed) {
                return Ok(Self(canonical.to_string()));
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the category label
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against another label
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Empty,
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Empty => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        let cat = Category::parse("Food & Dining").unwrap();
        assert_eq!(cat.name(), "Food & Dining");
    }

    #[test]
    fn test_parse_canonicalizes_case() {
        let cat = Category::parse("food & dining").unwrap();
        assert_eq!(cat.name(), "Food & Dining");

        let cat = Category::parse("  TRAVEL  ").unwrap();
        assert_eq!(cat.name(), "Travel");
    }

    #[test]
    fn test_parse_custom_label() {
        let cat = Category::parse("Pets").unwrap();
        assert_eq!(cat.name(), "Pets");
    }

    #[test]
    fn test_parse_empty_rejected() {
        assert_eq!(Category::parse(""), Err(CategoryParseError::Empty));
        assert_eq!(Category::parse("   "), Err(CategoryParseError::Empty));
    }

    #[test]
    fn test_matches() {
        let cat = Category::parse("Travel").unwrap();
        assert!(cat.matches("travel"));
        assert!(cat.matches(" TRAVEL "));
        assert!(!cat.matches("food"));
    }

    #[test]
    fn test_serialization() {
        let cat = Category::parse("Healthcare").unwrap();
        let json = serde_json::to_string(&cat).unwrap();
        assert_eq!(json, "\"Healthcare\"");

        let deserialized: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(cat, deserialized);
    }
}
