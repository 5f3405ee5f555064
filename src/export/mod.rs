//! Export functionality for spendlog
//!
//! Read-only snapshot writers; nothing here mutates the collection.

pub mod csv;
pub mod json;

pub use self::csv::{write_expenses_csv, CSV_HEADERS};
pub use self::json::write_expenses_json;
