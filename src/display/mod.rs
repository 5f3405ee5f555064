//! Terminal display formatting for spendlog

pub mod expense;

pub use expense::{format_expense_row, format_expense_table};
