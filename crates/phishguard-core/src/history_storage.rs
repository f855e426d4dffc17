//! Durable backing slot for the analysis history.

use anyhow::{Context, Result};
use phishguard_types::AnalysisRecord;
use std::fs;
use std::path::{Path, PathBuf};

const HISTORY_FILE: &str = "history.json";

/// Manages history persistence to the filesystem.
///
/// `HistoryStorage` owns a single named slot (`history.json` under the base
/// directory) holding the serialized record sequence. The slot is read once
/// at startup and overwritten wholesale on every mutation.
pub struct HistoryStorage {
    base_dir: PathBuf,
}

impl HistoryStorage {
    /// Creates a new `HistoryStorage` instance with the specified base directory.
    ///
    /// The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .context("Failed to create history directory")?;

        Ok(Self { base_dir })
    }

    /// Creates a `HistoryStorage` instance at the default location (~/.phishguard).
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or if
    /// the directory cannot be created.
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .context("Failed to get home directory")?;
        let base_dir = home_dir.join(".phishguard");
        Self::new(base_dir)
    }

    /// Overwrites the slot with the full record sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or if the file cannot be written.
    pub fn save(&self, records: &[AnalysisRecord]) -> Result<()> {
        let file_path = self.history_file_path();
        let json = serde_json::to_string_pretty(records)
            .context("Failed to serialize analysis history")?;

        fs::write(&file_path, json)
            .context(format!("Failed to write history file: {:?}", file_path))?;

        Ok(())
    }

    /// Reads the full record sequence from the slot.
    ///
    /// A missing slot is an empty history, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or contains
    /// invalid JSON. Callers on the startup path treat that as empty
    /// (fail open) rather than propagating.
    pub fn load(&self) -> Result<Vec<AnalysisRecord>> {
        let file_path = self.history_file_path();

        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&file_path)
            .context(format!("Failed to read history file: {:?}", file_path))?;

        let records: Vec<AnalysisRecord> = serde_json::from_str(&json)
            .context("Failed to deserialize analysis history")?;

        Ok(records)
    }

    /// Returns the path of the slot file.
    fn history_file_path(&self) -> PathBuf {
        self.base_dir.join(HISTORY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishguard_types::InputType;
    use tempfile::TempDir;

    fn create_test_record(text: &str, score: u8) -> AnalysisRecord {
        AnalysisRecord::new(
            InputType::Url,
            text,
            score,
            "Test summary",
            vec!["indicator one".to_string()],
        )
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = HistoryStorage::new(temp_dir.path()).unwrap();

        let records = vec![
            create_test_record("https://one.example", 10),
            create_test_record("https://two.example", 80),
        ];

        storage.save(&records).unwrap();
        let loaded = storage.load().unwrap();

        // Exact field equality, order preserved.
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let storage = HistoryStorage::new(temp_dir.path()).unwrap();

        assert_eq!(storage.load().unwrap(), Vec::new());
    }

    #[test]
    fn test_load_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = HistoryStorage::new(temp_dir.path()).unwrap();

        fs::write(temp_dir.path().join(HISTORY_FILE), "{not json").unwrap();

        assert!(storage.load().is_err());
    }

    #[test]
    fn test_save_overwrites_previous_slot() {
        let temp_dir = TempDir::new().unwrap();
        let storage = HistoryStorage::new(temp_dir.path()).unwrap();

        storage
            .save(&[create_test_record("https://old.example", 5)])
            .unwrap();
        storage.save(&[]).unwrap();

        assert_eq!(storage.load().unwrap(), Vec::new());
    }
}
