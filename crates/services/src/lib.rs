#![forbid(unsafe_code)]

pub mod app_services;
pub mod browse;
pub mod config;
pub mod corpus;
pub mod error;
pub mod progress;

pub use quiz_core::Clock;

pub use app_services::BrowserServices;
pub use browse::{
    AnswerOutcome, BrowseMode, BrowseSession, ChoiceMark, ChoiceMarks, PageItem, PageView,
};
pub use config::BrowserConfig;
pub use corpus::{
    CorpusLoader, CorpusSource, FetchMode, HttpCorpusSource, LoadedCorpus, StaticCorpusSource,
};
pub use error::{AppServicesError, CorpusError, SessionError};
pub use progress::ProgressTracker;
