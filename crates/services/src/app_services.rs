use std::sync::Arc;

use quiz_core::model::AttemptRecord;
use reqwest::Client;
use storage::repository::Storage;

use crate::Clock;
use crate::browse::BrowseSession;
use crate::config::BrowserConfig;
use crate::corpus::{CorpusLoader, CorpusSource, HttpCorpusSource};
use crate::error::{AppServicesError, SessionError};
use crate::progress::ProgressTracker;

/// Assembles the corpus loader and progress storage for the UI.
#[derive(Clone)]
pub struct BrowserServices {
    loader: CorpusLoader,
    storage: Storage,
    clock: Clock,
}

impl BrowserServices {
    #[must_use]
    pub fn new(
        config: BrowserConfig,
        source: Arc<dyn CorpusSource>,
        storage: Storage,
        clock: Clock,
    ) -> Self {
        Self {
            loader: CorpusLoader::new(source, config),
            storage,
            clock,
        }
    }

    /// Build services that fetch the corpus over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Client` if the HTTP client cannot be built.
    pub fn http(config: BrowserConfig, storage: Storage) -> Result<Self, AppServicesError> {
        let client = Client::builder().build()?;
        let source: Arc<dyn CorpusSource> = Arc::new(HttpCorpusSource::new(client));
        Ok(Self::new(config, source, storage, Clock::system()))
    }

    #[must_use]
    pub fn config(&self) -> &BrowserConfig {
        self.loader.config()
    }

    /// Load the whole corpus and the persisted progress into a fresh session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Corpus` if any chunk cannot be loaded.
    pub async fn start_session(&self) -> Result<BrowseSession, SessionError> {
        let corpus = self.loader.load().await?;
        let progress = ProgressTracker::load(Arc::clone(&self.storage.progress), self.clock);
        Ok(BrowseSession::new(
            corpus.questions,
            progress,
            self.config().page_size,
        ))
    }

    /// Newest persisted attempts first.
    #[must_use]
    pub fn recent_attempts(&self, limit: usize) -> Vec<AttemptRecord> {
        let history = self.storage.progress.load_history();
        history.recent(limit).into_iter().cloned().collect()
    }
}
