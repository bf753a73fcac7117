use chrono::{DateTime, Utc};
use std::collections::VecDeque;

use crate::model::ids::QuestionId;

/// Maximum number of attempts kept in the durable history.
pub const HISTORY_LIMIT: usize = 200;

//
// ─── ATTEMPT RECORD ────────────────────────────────────────────────────────────
//

/// Outcome of a single answer-choice click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRecord {
    pub question_id: QuestionId,
    pub correct: bool,
    pub answered_at: DateTime<Utc>,
}

impl AttemptRecord {
    #[must_use]
    pub fn new(question_id: QuestionId, correct: bool, answered_at: DateTime<Utc>) -> Self {
        Self {
            question_id,
            correct,
            answered_at,
        }
    }
}

//
// ─── HISTORY LOG ───────────────────────────────────────────────────────────────
//

/// Ordered attempt log, oldest first, bounded to the most recent `limit` entries.
///
/// Entries beyond the window are dropped silently on append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    entries: VecDeque<AttemptRecord>,
    limit: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl HistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if `limit` is zero.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        assert!(limit > 0, "history limit must be > 0");
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Builds a log from persisted entries, keeping only the newest `HISTORY_LIMIT`.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = AttemptRecord>) -> Self {
        let mut log = Self::default();
        for entry in entries {
            log.push(entry);
        }
        log
    }

    pub fn push(&mut self, record: AttemptRecord) {
        self.entries.push_back(record);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &AttemptRecord> + ExactSizeIterator {
        self.entries.iter()
    }

    /// The last `n` entries, newest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<&AttemptRecord> {
        self.entries.iter().rev().take(n).collect()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<AttemptRecord> {
        self.entries.iter().cloned().collect()
    }
}
