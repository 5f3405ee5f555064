//! CSV export functionality
//!
//! Writes a read-only snapshot of the expense collection, one row per
//! expense plus a header row, with standard quoting for embedded commas and
//! quotes. Rows keep the order of the input slice so repeated exports from
//! the same state are byte-identical.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

/// Header row of the expense CSV format
pub const CSV_HEADERS: [&str; 5] = ["id", "date", "amount", "category", "description"];

/// Write the expense collection as CSV
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADERS)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.as_uuid().to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.amount.to_decimal_string(),
                expense.category.name().to_string(),
                expense.description.clone(),
            ])
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str, description: &str) -> Expense {
        Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Money::from_cents(cents),
            Category::parse(category).unwrap(),
            description,
        )
        .unwrap()
    }

    #[test]
    fn test_header_and_rows() {
        let expenses = vec![expense(5000, "food", "groceries")];

        let mut output = Vec::new();
        write_expenses_csv(&expenses, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        let mut lines = csv_string.lines();
        assert_eq!(lines.next().unwrap(), "id,date,amount,category,description");

        let row = lines.next().unwrap();
        assert!(row.contains("2024-01-05"));
        assert!(row.contains("50.00"));
        assert!(row.contains("food"));
        assert!(row.contains("groceries"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_embedded_commas_and_quotes_are_escaped() {
        let expenses = vec![expense(700, "food", "coffee, \"large\"")];

        let mut output = Vec::new();
        write_expenses_csv(&expenses, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert!(csv_string.contains("\"coffee, \"\"large\"\"\""));
    }

    #[test]
    fn test_export_twice_is_identical() {
        let expenses = vec![
            expense(5000, "food", "groceries"),
            expense(3000, "transport", "bus"),
        ];

        let mut first = Vec::new();
        let mut second = Vec::new();
        write_expenses_csv(&expenses, &mut first).unwrap();
        write_expenses_csv(&expenses, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_collection_writes_header_only() {
        let mut output = Vec::new();
        write_expenses_csv(&[], &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(csv_string.trim_end(), "id,date,amount,category,description");
    }
}
