//! JSON snapshot export
//!
//! Writes the expense collection to an arbitrary path in the same shape as
//! the persisted store, for sharing or external processing.

use std::io::Write;

use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

#[derive(Serialize)]
struct JsonSnapshot<'a> {
    expenses: &'a [Expense],
}

/// Write the expense collection as pretty-printed JSON
pub fn write_expenses_json<W: Write>(expenses: &[Expense], writer: &mut W) -> TrackerResult<()> {
    let snapshot = JsonSnapshot { expenses };

    serde_json::to_writer_pretty(&mut *writer, &snapshot)
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    writer
        .write_all(b"\n")
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
