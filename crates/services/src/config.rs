use std::env;

use quiz_core::PAGE_SIZE;
use url::Url;

use crate::error::AppServicesError;

pub const DEFAULT_MANIFEST_PATH: &str = "manifest.json";
pub const DEFAULT_FALLBACK_CHUNK_PATH: &str = "sample/sample-questions.json";
pub const DEFAULT_DESKTOP_DATA_ROOT: &str = "http://127.0.0.1:8080/data/";

/// Where the corpus lives and how it is paged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserConfig {
    pub data_root: Url,
    pub manifest_path: String,
    pub fallback_chunk_path: String,
    pub page_size: usize,
}

impl BrowserConfig {
    /// Config rooted at `data_root`; a trailing slash is added so relative
    /// chunk paths resolve inside the directory.
    #[must_use]
    pub fn new(mut data_root: Url) -> Self {
        if !data_root.path().ends_with('/') {
            let path = format!("{}/", data_root.path());
            data_root.set_path(&path);
        }
        Self {
            data_root,
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            fallback_chunk_path: DEFAULT_FALLBACK_CHUNK_PATH.to_string(),
            page_size: PAGE_SIZE,
        }
    }

    /// Parse a data root given as text.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::InvalidDataRoot` if `raw` is not an absolute URL.
    pub fn from_root_str(raw: &str) -> Result<Self, AppServicesError> {
        let url = Url::parse(raw.trim()).map_err(|source| AppServicesError::InvalidDataRoot {
            raw: raw.to_string(),
            source,
        })?;
        Ok(Self::new(url))
    }

    /// Data root from `QUIZ_DATA_ROOT`, else the local development server.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::InvalidDataRoot` if the variable is not a URL.
    pub fn from_env() -> Result<Self, AppServicesError> {
        let raw = env::var("QUIZ_DATA_ROOT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DESKTOP_DATA_ROOT.into());
        Self::from_root_str(&raw)
    }

    #[must_use]
    pub fn with_manifest_path(mut self, path: impl Into<String>) -> Self {
        self.manifest_path = path.into();
        self
    }

    #[must_use]
    pub fn with_fallback_chunk_path(mut self, path: impl Into<String>) -> Self {
        self.fallback_chunk_path = path.into();
        self
    }

    /// Absolute URL of the manifest.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` when the manifest path cannot be joined.
    pub fn manifest_url(&self) -> Result<Url, url::ParseError> {
        self.data_root.join(&self.manifest_path)
    }
}
