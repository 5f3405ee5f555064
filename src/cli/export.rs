//! Export and import CLI commands

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{write_expenses_csv, write_expenses_json};
use crate::import::import_expenses_csv;
use crate::manager::ExpenseManager;
use crate::storage::FileHandler;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Export the expense collection to a file
pub fn handle_export(
    manager: &ExpenseManager,
    file_handler: &FileHandler,
    file: PathBuf,
    format: ExportFormat,
) -> TrackerResult<()> {
    match format {
        ExportFormat::Csv => {
            file_handler.export_csv(manager.all(), &file)?;
        }
        ExportFormat::Json => {
            let out = File::create(&file).map_err(|e| {
                TrackerError::Storage(format!("Failed to create {}: {}", file.display(), e))
            })?;
            let mut writer = BufWriter::new(out);
            write_expenses_json(manager.all(), &mut writer)?;
            writer.flush().map_err(|e| {
                TrackerError::Storage(format!("Failed to flush {}: {}", file.display(), e))
            })?;
        }
    }

    println!("Exported {} expense(s) to {}", manager.len(), file.display());
    Ok(())
}

/// Import expenses from a CSV file, appending to the collection
pub fn handle_import(
    manager: &mut ExpenseManager,
    file_handler: &FileHandler,
    file: PathBuf,
) -> TrackerResult<()> {
    let result = import_expenses_csv(&file)?;
    let imported = result.imported_count();
    let skipped = result.skipped_count();

    for row in &result.skipped {
        println!("Skipping line {}: {}", row.line, row.reason);
    }

    manager.extend(result.expenses);
    file_handler.save(manager.all())?;

    println!("Imported {} expense(s) from {}", imported, file.display());
    if skipped > 0 {
        println!("Skipped {} invalid row(s)", skipped);
    }

    Ok(())
}
