//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::ManifestError;
use storage::repository::StorageError;

/// Errors emitted while fetching or decoding corpus resources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CorpusError {
    #[error("request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request for {url} returned status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("resource {url} not found")]
    Missing { url: String },
    #[error("resource {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// Errors emitted by the browse session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("unknown question {0}")]
    UnknownQuestion(String),
    #[error("question {0} has no answer choices")]
    NoChoices(String),
    #[error("choice {choice} is out of range for question {question}")]
    ChoiceOutOfRange { question: String, choice: usize },
    #[error(transparent)]
    Corpus(#[from] CorpusError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("invalid data root `{raw}`: {source}")]
    InvalidDataRoot {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("http client could not be built: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
