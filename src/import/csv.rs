//! CSV import functionality
//!
//! Reads expenses from a CSV file with a header row. Columns are located by
//! name (case-insensitive); `date`, `amount`, and `category` are required,
//! `description` and `id` are optional. Invalid rows are skipped and
//! reported instead of aborting the whole import.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, ExpenseId, Money};

/// Outcome of a CSV import
#[derive(Debug, Default)]
pub struct ImportResult {
    /// Successfully constructed records
    pub expenses: Vec<Expense>,
    /// Rows that failed validation, with reasons
    pub skipped: Vec<SkippedRow>,
}

impl ImportResult {
    /// Number of imported records
    pub fn imported_count(&self) -> usize {
        self.expenses.len()
    }

    /// Number of skipped rows
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// A row that could not be imported
#[derive(Debug, Clone)]
pub struct SkippedRow {
    /// 1-based line number in the source file (header is line 1)
    pub line: usize,
    /// Why the row was skipped
    pub reason: String,
}

/// Indices of the recognized columns in the header row
struct ColumnIndexes {
    date: usize,
    amount: usize,
    category: usize,
    description: Option<usize>,
    id: Option<usize>,
}

impl ColumnIndexes {
    fn from_headers(headers: &csv::StringRecord) -> TrackerResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };

        let required = |name: &'static str| {
            find(name).ok_or_else(|| {
                TrackerError::Format(format!("CSV is missing required column '{}'", name))
            })
        };

        Ok(Self {
            date: required("date")?,
            amount: required("amount")?,
            category: required("category")?,
            description: find("description"),
            id: find("id"),
        })
    }
}

/// Import expenses from a CSV file on disk
pub fn import_expenses_csv(path: &Path) -> TrackerResult<ImportResult> {
    let file = File::open(path).map_err(|e| {
        TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;
    read_expenses_csv(file)
}

/// Import expenses from any CSV reader
pub fn read_expenses_csv<R: Read>(reader: R) -> TrackerResult<ImportResult> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| TrackerError::Format(format!("Failed to read CSV header: {}", e)))?
        .clone();
    let columns = ColumnIndexes::from_headers(&headers)?;

    let mut result = ImportResult::default();

    for (index, record) in csv_reader.records().enumerate() {
        // Header occupies line 1
        let line = index + 2;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                result.skipped.push(SkippedRow {
                    line,
                    reason: format!("Malformed row: {}", e),
                });
                continue;
            }
        };

        match parse_record(&record, &columns) {
            Ok(expense) => result.expenses.push(expense),
            Err(reason) => result.skipped.push(SkippedRow { line, reason }),
        }
    }

    Ok(result)
}

/// Build a validated expense from one CSV record
fn parse_record(record: &csv::StringRecord, columns: &ColumnIndexes) -> Result<Expense, String> {
    let field = |index: usize| record.get(index).unwrap_or("");

    let date = NaiveDate::parse_from_str(field(columns.date).trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", field(columns.date)))?;

    let amount = Money::parse(field(columns.amount)).map_err(|e| e.to_string())?;

    let category = Category::parse(field(columns.category)).map_err(|e| e.to_string())?;

    let description = columns.description.map(|i| field(i)).unwrap_or("");

    let mut expense =
        Expense::new(date, amount, category, description).map_err(|e| e.to_string())?;

    // Preserve an id column when it parses; otherwise keep the fresh one
    if let Some(id_index) = columns.id {
        if let Ok(id) = field(id_index).parse::<ExpenseId>() {
            expense.id = id;
        }
    }

    Ok(expense)
}
