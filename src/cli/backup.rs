//! Backup CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::manager::ExpenseManager;
use crate::storage::{json_file_valid, FileHandler};

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a backup of the current data file
    Create,
    /// List available backups
    List,
    /// Restore from a backup, replacing current data
    Restore {
        /// Backup filename (or full path)
        file: String,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    manager: &mut ExpenseManager,
    file_handler: &FileHandler,
    settings: &Settings,
    cmd: BackupCommands,
) -> TrackerResult<()> {
    match cmd {
        BackupCommands::Create => {
            let backup_path = file_handler.create_backup()?;
            println!("Backup created: {}", backup_path.display());

            let deleted =
                file_handler.prune_backups(settings.backup_retention.max_count as usize)?;
            if !deleted.is_empty() {
                println!("Pruned {} old backup(s)", deleted.len());
            }
        }

        BackupCommands::List => {
            let backups = file_handler.list_backups()?;
            if backups.is_empty() {
                println!("No backups found.");
            } else {
                println!("Available backups (newest first):");
                for backup in backups {
                    let marker = if json_file_valid(&backup.path) {
                        ""
                    } else {
                        "  (corrupt)"
                    };
                    println!(
                        "  {}  {}  {} bytes{}",
                        backup.filename,
                        backup.created_at.format("%Y-%m-%d %H:%M:%S"),
                        backup.size_bytes,
                        marker
                    );
                }
            }
        }

        BackupCommands::Restore { file } => {
            // Bare filenames resolve inside the backup directory
            let path = PathBuf::from(&file);
            let path = if path.is_absolute() || path.exists() {
                path
            } else {
                file_handler.backup_dir().join(&file)
            };

            let restored = file_handler.restore_backup(&path)?;
            let count = restored.len();
            manager.replace_all(restored);
            println!("Restored {} expense(s) from {}", count, path.display());
        }
    }

    Ok(())
}
