//! Bounded, durable cache of past analyses.

use phishguard_types::AnalysisRecord;

use crate::error::{PhishGuardError, Result};
use crate::history_storage::HistoryStorage;

/// How many records the history keeps by default.
pub const DEFAULT_CAPACITY: usize = 50;

/// A bounded, most-recent-first collection of [`AnalysisRecord`]s backed by
/// a [`HistoryStorage`] slot.
///
/// The store exclusively owns its record sequence and its durable backing.
/// Every mutation is followed by a wholesale persist of the sequence, so
/// the slot always reflects the in-memory state of the last completed call.
pub struct HistoryStore {
    records: Vec<AnalysisRecord>,
    capacity: usize,
    storage: HistoryStorage,
}

impl HistoryStore {
    /// Rehydrates a store from its durable slot.
    ///
    /// Corrupt or unreadable history data is logged and treated as an empty
    /// history; the startup path never fails on bad data.
    pub fn open(storage: HistoryStorage, capacity: usize) -> Self {
        let mut records = match storage.load() {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("Failed to load analysis history, starting empty: {err:#}");
                Vec::new()
            }
        };
        records.truncate(capacity);

        Self {
            records,
            capacity,
            storage,
        }
    }

    /// Inserts a record at the front, evicting from the tail when the
    /// capacity would be exceeded, then persists the whole sequence.
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error if the durable write fails. The
    /// in-memory insert stands regardless; persistence is best-effort.
    pub fn add(&mut self, record: AnalysisRecord) -> Result<()> {
        self.records.insert(0, record);
        self.records.truncate(self.capacity);
        self.persist()
    }

    /// Returns the current sequence, most-recent-first.
    pub fn all(&self) -> &[AnalysisRecord] {
        &self.records
    }

    /// Returns the most recently added record, if any.
    pub fn latest(&self) -> Option<&AnalysisRecord> {
        self.records.first()
    }

    /// Empties the history and persists the empty state. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns a `Persistence` error if the durable write fails.
    pub fn clear(&mut self) -> Result<()> {
        self.records.clear();
        self.persist()
    }

    /// Returns the number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) -> Result<()> {
        self.storage
            .save(&self.records)
            .map_err(|err| PhishGuardError::persistence(format!("{err:#}")))
    }
}
