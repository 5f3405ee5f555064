//! Backup management
//!
//! Backups are verbatim, timestamped copies of the persisted expenses file.
//! Restoring validates the archive before it replaces the canonical file, so
//! a corrupt backup never clobbers good data.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::file_io::write_json_atomic;
use super::{ExpenseData, FileHandler};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Expense;

const BACKUP_PREFIX: &str = "expenses_backup_";

/// Metadata about a backup file
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to the backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
}

impl FileHandler {
    /// Create a timestamped backup of the persisted expenses file
    ///
    /// The copy is verbatim. Fails with a storage error if the data file
    /// does not exist yet.
    pub fn create_backup(&self) -> TrackerResult<PathBuf> {
        if !self.data_file_exists() {
            return Err(TrackerError::Storage(format!(
                "Nothing to back up: {} does not exist",
                self.data_file().display()
            )));
        }

        fs::create_dir_all(self.backup_dir()).map_err(|e| {
            TrackerError::Storage(format!("Failed to create backup directory: {}", e))
        })?;

        let now = Utc::now();
        let filename = format!(
            "{}{}_{:03}.json",
            BACKUP_PREFIX,
            now.format("%Y%m%d_%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let backup_path = self.backup_dir().join(&filename);

        fs::copy(self.data_file(), &backup_path)
            .map_err(|e| TrackerError::Storage(format!("Failed to write backup: {}", e)))?;

        Ok(backup_path)
    }

    /// List available backups, newest first
    pub fn list_backups(&self) -> TrackerResult<Vec<BackupInfo>> {
        if !self.backup_dir().exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(self.backup_dir()).map_err(|e| {
            TrackerError::Storage(format!("Failed to read backup directory: {}", e))
        })? {
            let entry = entry.map_err(|e| {
                TrackerError::Storage(format!("Failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Restore the expense collection from a backup file
    ///
    /// Fails with a storage error if the backup is missing or unreadable and
    /// a format error if it is corrupt. On success the canonical data file is
    /// atomically replaced and the restored records are returned so the
    /// caller can rebuild its in-memory state, discarding anything unsaved.
    pub fn restore_backup(&self, backup_path: &Path) -> TrackerResult<Vec<Expense>> {
        if !backup_path.exists() {
            return Err(TrackerError::Storage(format!(
                "Backup not found: {}",
                backup_path.display()
            )));
        }

        let contents = fs::read_to_string(backup_path)
            .map_err(|e| TrackerError::Storage(format!("Failed to read backup: {}", e)))?;

        let data: ExpenseData = serde_json::from_str(&contents).map_err(|e| {
            TrackerError::Format(format!(
                "Failed to parse backup {}: {}",
                backup_path.display(),
                e
            ))
        })?;

        for expense in &data.expenses {
            expense.validate().map_err(|e| {
                TrackerError::Format(format!(
                    "Invalid expense record {} in backup: {}",
                    expense.id, e
                ))
            })?;
        }

        write_json_atomic(self.data_file(), &data)?;

        Ok(data.expenses)
    }

    /// Delete the oldest backups beyond `keep`, returning the deleted paths
    pub fn prune_backups(&self, keep: usize) -> TrackerResult<Vec<PathBuf>> {
        let backups = self.list_backups()?;
        let mut deleted = Vec::new();

        for backup in backups.into_iter().skip(keep) {
            fs::remove_file(&backup.path).map_err(|e| {
                TrackerError::Storage(format!("Failed to delete old backup: {}", e))
            })?;
            deleted.push(backup.path);
        }

        Ok(deleted)
    }
}

/// Parse backup metadata from a backup file path
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    let date_part = filename
        .strip_prefix(BACKUP_PREFIX)?
        .strip_suffix(".json")?;
    let created_at = parse_backup_timestamp(date_part)?;

    let metadata = fs::metadata(path).ok()?;

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes: metadata.len(),
    })
}

/// Parse a backup timestamp from the filename date part
/// (`YYYYMMDD_HHMMSS` with optional `_mmm` millisecond suffix)
fn parse_backup_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = date_str.split('_').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let date_part = parts[0];
    let time_part = parts[1];
    let millis: u32 = if parts.len() == 3 {
        parts[2].parse().ok()?
    } else {
        0
    };

    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let year: i32 = date_part[0..4].parse().ok()?;
    let month: u32 = date_part[4..6].parse().ok()?;
    let day: u32 = date_part[6..8].parse().ok()?;
    let hour: u32 = time_part[0..2].parse().ok()?;
    let minute: u32 = time_part[2..4].parse().ok()?;
    let second: u32 = time_part[4..6].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;

    Some(DateTime::from_naive_utc_and_offset(
        NaiveDateTime::new(date, time),
        Utc,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::{Category, Money};
    use chrono::Datelike;
    use tempfile::TempDir;

    fn create_test_handler() -> (TempDir, FileHandler) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let handler = FileHandler::new(&paths).unwrap();
        (temp_dir, handler)
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            Money::from_cents(5000),
            Category::parse("food").unwrap(),
            "groceries",
        )
        .unwrap()]
    }

    #[test]
    fn test_backup_without_data_file_fails() {
        let (_temp_dir, handler) = create_test_handler();

        let err = handler.create_backup().unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_backup_is_verbatim_copy() {
        let (_temp_dir, handler) = create_test_handler();

        handler.save(&sample_expenses()).unwrap();
        let backup_path = handler.create_backup().unwrap();

        assert_eq!(
            fs::read(handler.data_file()).unwrap(),
            fs::read(&backup_path).unwrap()
        );
    }

    #[test]
    fn test_list_backups_newest_first() {
        let (_temp_dir, handler) = create_test_handler();

        handler.save(&sample_expenses()).unwrap();
        handler.create_backup().unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        handler.create_backup().unwrap();

        let backups = handler.list_backups().unwrap();
        assert_eq!(backups.len(), 2);
        assert!(backups[0].created_at >= backups[1].created_at);
    }

    #[test]
    fn test_restore_replaces_data_and_returns_records() {
        let (_temp_dir, handler) = create_test_handler();

        let original = sample_expenses();
        handler.save(&original).unwrap();
        let backup_path = handler.create_backup().unwrap();

        // Diverge from the backed-up state
        handler.save(&[]).unwrap();
        assert!(handler.load().unwrap().is_empty());

        let restored = handler.restore_backup(&backup_path).unwrap();
        assert_eq!(restored, original);
        assert_eq!(handler.load().unwrap(), original);
    }

    #[test]
    fn test_restore_missing_backup_fails() {
        let (temp_dir, handler) = create_test_handler();

        let err = handler
            .restore_backup(&temp_dir.path().join("no-such-backup.json"))
            .unwrap_err();
        assert!(err.is_storage());
    }

    #[test]
    fn test_restore_corrupt_backup_fails_and_preserves_data() {
        let (temp_dir, handler) = create_test_handler();

        let original = sample_expenses();
        handler.save(&original).unwrap();

        let corrupt = temp_dir.path().join("corrupt.json");
        fs::write(&corrupt, "{\"expenses\": [tru").unwrap();

        let err = handler.restore_backup(&corrupt).unwrap_err();
        assert!(err.is_format());

        // The canonical file is untouched by a failed restore
        assert_eq!(handler.load().unwrap(), original);
    }

    #[test]
    fn test_prune_keeps_newest() {
        let (_temp_dir, handler) = create_test_handler();

        handler.save(&sample_expenses()).unwrap();
        for _ in 0..5 {
            handler.create_backup().unwrap();
            std::thread::sleep(std::time::Duration::from_millis(20));
        }

        let deleted = handler.prune_backups(3).unwrap();
        assert_eq!(deleted.len(), 2);

        let remaining = handler.list_backups().unwrap();
        assert_eq!(remaining.len(), 3);
    }

    #[test]
    fn test_parse_backup_timestamp() {
        let timestamp = parse_backup_timestamp("20240127_143022").unwrap();
        assert_eq!(timestamp.year(), 2024);
        assert_eq!(timestamp.month(), 1);
        assert_eq!(timestamp.day(), 27);

        let timestamp = parse_backup_timestamp("20240127_143022_456").unwrap();
        assert_eq!(timestamp.timestamp_subsec_millis(), 456);

        assert!(parse_backup_timestamp("not-a-timestamp").is_none());
    }
}
