//! Storage layer for spendlog
//!
//! JSON file persistence with atomic writes, plus CSV export and backups.
//! [`FileHandler`] is the only component that touches the filesystem; the
//! rest of the crate operates on in-memory structures.

pub mod backup;
pub mod file_io;

pub use backup::BackupInfo;
pub use file_io::{json_file_valid, read_json_required, write_json_atomic};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::export::write_expenses_csv;
use crate::models::{Budget, Expense};

/// Serialized shape of the expenses file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// Serialized shape of the budgets file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    budgets: Vec<Budget>,
}

/// Handles persistence of the expense collection and budgets
///
/// Constructed from explicit paths; there is no ambient file configuration.
pub struct FileHandler {
    data_file: PathBuf,
    budgets_file: PathBuf,
    backup_dir: PathBuf,
}

impl FileHandler {
    /// Create a FileHandler from resolved application paths
    pub fn new(paths: &TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            data_file: paths.expenses_file(),
            budgets_file: paths.budgets_file(),
            backup_dir: paths.backup_dir(),
        })
    }

    /// Path of the canonical expenses file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Path of the backup directory
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Whether the expenses file exists yet
    ///
    /// Lets the shell treat a first run as an empty collection without
    /// weakening [`FileHandler::load`], which treats a missing file as an
    /// error.
    pub fn data_file_exists(&self) -> bool {
        self.data_file.exists()
    }

    /// Save a complete snapshot of the expense collection
    ///
    /// The write is atomic: a temp file is written, flushed, synced, and
    /// renamed over the target, so a failure leaves the previous file intact.
    pub fn save(&self, expenses: &[Expense]) -> TrackerResult<()> {
        let data = ExpenseData {
            expenses: expenses.to_vec(),
        };
        write_json_atomic(&self.data_file, &data)
    }

    /// Load the expense collection from disk
    ///
    /// Fails with a storage error if the file is missing or unreadable, and
    /// a format error if the JSON is corrupt or any record violates expense
    /// invariants.
    pub fn load(&self) -> TrackerResult<Vec<Expense>> {
        let data: ExpenseData = read_json_required(&self.data_file)?;
        validate_records(&data.expenses)?;
        Ok(data.expenses)
    }

    /// Save the budget list
    pub fn save_budgets(&self, budgets: &[Budget]) -> TrackerResult<()> {
        let data = BudgetData {
            budgets: budgets.to_vec(),
        };
        write_json_atomic(&self.budgets_file, &data)
    }

    /// Load the budget list, treating a missing file as no budgets
    pub fn load_budgets(&self) -> TrackerResult<Vec<Budget>> {
        if !self.budgets_file.exists() {
            return Ok(Vec::new());
        }
        let data: BudgetData = read_json_required(&self.budgets_file)?;
        for budget in &data.budgets {
            if budget.limit.is_negative() {
                return Err(TrackerError::Format(format!(
                    "Invalid budget in {}: {}",
                    self.budgets_file.display(),
                    budget
                )));
            }
        }
        Ok(data.budgets)
    }

    /// Export a read-only CSV snapshot of the collection
    ///
    /// One row per expense plus a header row, in the order given, so exports
    /// from the same collection state are byte-identical.
    pub fn export_csv(&self, expenses: &[Expense], destination: &Path) -> TrackerResult<()> {
        let file = File::create(destination).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create {}: {}",
                destination.display(),
                e
            ))
        })?;
        let mut writer = BufWriter::new(file);
        write_expenses_csv(expenses, &mut writer)?;
        writer.flush().map_err(|e| {
            TrackerError::Storage(format!("Failed to flush {}: {}", destination.display(), e))
        })
    }
}

/// Re-validate records that bypassed the `Expense` constructor
fn validate_records(expenses: &[Expense]) -> TrackerResult<()> {
    for expense in expenses {
        expense.validate().map_err(|e| {
            TrackerError::Format(format!("Invalid expense record {}: {}", expense.id, e))
        })?;
    }
    Ok(())
}
