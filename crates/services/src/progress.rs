use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::model::{AttemptRecord, HistoryLog, QuestionId, StarredSet};
use storage::repository::ProgressRepository;
use tracing::warn;

use crate::error::SessionError;

/// In-memory starred set and attempt history, persisted after every mutation.
#[derive(Clone)]
pub struct ProgressTracker {
    repo: Arc<dyn ProgressRepository>,
    clock: Clock,
    starred: StarredSet,
    history: HistoryLog,
}

impl ProgressTracker {
    /// Load persisted progress; malformed content starts empty.
    #[must_use]
    pub fn load(repo: Arc<dyn ProgressRepository>, clock: Clock) -> Self {
        let starred = repo.load_starred();
        let history = repo.load_history();
        Self {
            repo,
            clock,
            starred,
            history,
        }
    }

    #[must_use]
    pub fn starred(&self) -> &StarredSet {
        &self.starred
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    #[must_use]
    pub fn is_starred(&self, id: &QuestionId) -> bool {
        self.starred.contains(id)
    }

    /// Flip and persist starred membership. Returns the new membership.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the write fails; the in-memory
    /// set is restored so it keeps matching storage.
    pub fn toggle_star(&mut self, id: &QuestionId) -> Result<bool, SessionError> {
        let starred = self.starred.toggle(id);
        if let Err(err) = self.repo.save_starred(&self.starred) {
            self.starred.toggle(id);
            warn!(question = %id, error = %err, "could not persist starred set");
            return Err(err.into());
        }
        Ok(starred)
    }

    /// Append and persist one attempt.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the write fails. The attempt stays
    /// in memory and is written with the next successful save.
    pub fn record_attempt(
        &mut self,
        id: &QuestionId,
        correct: bool,
    ) -> Result<AttemptRecord, SessionError> {
        let attempt = AttemptRecord::new(id.clone(), correct, self.clock.now());
        self.history.push(attempt.clone());
        if let Err(err) = self.repo.save_history(&self.history) {
            warn!(question = %id, error = %err, "could not persist attempt history");
            return Err(err.into());
        }
        Ok(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::HISTORY_LIMIT;
    use quiz_core::time::{fixed_clock, fixed_now};
    use storage::repository::{Storage, StorageError};

    fn id(raw: &str) -> QuestionId {
        QuestionId::new(raw).unwrap()
    }

    struct ReadOnlyRepo;

    impl ProgressRepository for ReadOnlyRepo {
        fn load_starred(&self) -> StarredSet {
            StarredSet::new()
        }

        fn save_starred(&self, _starred: &StarredSet) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".into()))
        }

        fn load_history(&self) -> HistoryLog {
            HistoryLog::new()
        }

        fn save_history(&self, _history: &HistoryLog) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".into()))
        }
    }

    #[test]
    fn toggle_persists_immediately() {
        let storage = Storage::in_memory();
        let mut tracker = ProgressTracker::load(Arc::clone(&storage.progress), fixed_clock());

        assert!(tracker.toggle_star(&id("q1")).unwrap());
        assert!(storage.progress.load_starred().contains(&id("q1")));

        assert!(!tracker.toggle_star(&id("q1")).unwrap());
        assert!(storage.progress.load_starred().is_empty());
    }

    #[test]
    fn failed_toggle_restores_membership() {
        let mut tracker = ProgressTracker::load(Arc::new(ReadOnlyRepo), fixed_clock());
        let err = tracker.toggle_star(&id("q1")).unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
        assert!(!tracker.is_starred(&id("q1")));
    }

    #[test]
    fn attempts_are_stamped_and_bounded() {
        let storage = Storage::in_memory();
        let mut tracker = ProgressTracker::load(Arc::clone(&storage.progress), fixed_clock());

        for i in 0..(HISTORY_LIMIT + 10) {
            let attempt = tracker.record_attempt(&id(&format!("q{i}")), i % 2 == 0).unwrap();
            assert_eq!(attempt.answered_at, fixed_now());
        }

        let persisted = storage.progress.load_history();
        assert_eq!(persisted.len(), HISTORY_LIMIT);
        assert_eq!(persisted.iter().next().unwrap().question_id.as_str(), "q10");
        assert_eq!(tracker.history().len(), HISTORY_LIMIT);
    }

    #[test]
    fn reload_sees_previous_progress() {
        let storage = Storage::in_memory();
        let mut first = ProgressTracker::load(Arc::clone(&storage.progress), fixed_clock());
        first.toggle_star(&id("q9")).unwrap();
        first.record_attempt(&id("q9"), true).unwrap();

        let second = ProgressTracker::load(Arc::clone(&storage.progress), fixed_clock());
        assert!(second.is_starred(&id("q9")));
        assert_eq!(second.history().len(), 1);
    }
}
