use quiz_core::model::{AttemptRecord, QuestionId};
use quiz_core::time::{from_epoch_millis, to_epoch_millis};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Persisted shape of one attempt under the `"history"` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRow {
    #[serde(alias = "questionId")]
    pub id: String,
    pub correct: bool,
    pub ts: i64,
}

impl AttemptRow {
    #[must_use]
    pub fn from_attempt(attempt: &AttemptRecord) -> Self {
        Self {
            id: attempt.question_id.to_string(),
            correct: attempt.correct,
            ts: to_epoch_millis(attempt.answered_at),
        }
    }

    /// Converts back into a domain record; blank ids or out-of-range times yield `None`.
    #[must_use]
    pub fn into_attempt(self) -> Option<AttemptRecord> {
        let question_id = QuestionId::new(self.id)?;
        let answered_at = from_epoch_millis(self.ts)?;
        Some(AttemptRecord::new(question_id, self.correct, answered_at))
    }
}

pub(crate) fn parse_starred(raw: &str) -> Result<Vec<QuestionId>, StorageError> {
    let ids: Vec<String> = serde_json::from_str(raw).map_err(ser)?;
    Ok(ids.into_iter().filter_map(QuestionId::new).collect())
}

pub(crate) fn parse_history(raw: &str) -> Result<Vec<AttemptRecord>, StorageError> {
    let rows: Vec<AttemptRow> = serde_json::from_str(raw).map_err(ser)?;
    Ok(rows.into_iter().filter_map(AttemptRow::into_attempt).collect())
}
