use std::sync::Arc;

use quiz_core::model::{HISTORY_LIMIT, HistoryLog, StarredSet};
use tracing::warn;

use super::mapping::{AttemptRow, parse_history, parse_starred, ser};
use crate::repository::{KeyValueStore, ProgressRepository, StorageError};

pub const STARRED_KEY: &str = "starred";
pub const HISTORY_KEY: &str = "history";

/// `ProgressRepository` persisting JSON arrays under the `"starred"` and
/// `"history"` keys of a [`KeyValueStore`].
#[derive(Clone)]
pub struct KvProgressRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvProgressRepository {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "persisted key unreadable; using empty value");
                None
            }
        }
    }
}

impl ProgressRepository for KvProgressRepository {
    fn load_starred(&self) -> StarredSet {
        let Some(raw) = self.read(STARRED_KEY) else {
            return StarredSet::new();
        };
        match parse_starred(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                warn!(key = STARRED_KEY, error = %err, "malformed persisted value; starting empty");
                StarredSet::new()
            }
        }
    }

    fn save_starred(&self, starred: &StarredSet) -> Result<(), StorageError> {
        let ids: Vec<&str> = starred.iter().map(|id| id.as_str()).collect();
        let json = serde_json::to_string(&ids).map_err(ser)?;
        self.store.set(STARRED_KEY, &json)
    }

    fn load_history(&self) -> HistoryLog {
        let Some(raw) = self.read(HISTORY_KEY) else {
            return HistoryLog::new();
        };
        match parse_history(&raw) {
            Ok(entries) => HistoryLog::from_entries(entries),
            Err(err) => {
                warn!(key = HISTORY_KEY, error = %err, "malformed persisted value; starting empty");
                HistoryLog::new()
            }
        }
    }

    fn save_history(&self, history: &HistoryLog) -> Result<(), StorageError> {
        let skip = history.len().saturating_sub(HISTORY_LIMIT);
        let rows: Vec<AttemptRow> = history
            .iter()
            .skip(skip)
            .map(AttemptRow::from_attempt)
            .collect();
        let json = serde_json::to_string(&rows).map_err(ser)?;
        self.store.set(HISTORY_KEY, &json)
    }
}
