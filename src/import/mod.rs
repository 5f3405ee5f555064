//! Import functionality for spendlog

pub mod csv;

pub use self::csv::{import_expenses_csv, read_expenses_csv, ImportResult, SkippedRow};
