use std::sync::Arc;

use quiz_core::model::{Manifest, Question};
use quiz_core::normalize::{RawRecord, normalize_all};
use tracing::{debug, info, warn};
use url::Url;

use super::source::{CorpusSource, FetchMode};
use crate::config::BrowserConfig;
use crate::error::CorpusError;

/// Where the manifest in use came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManifestOrigin {
    Remote,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedManifest {
    pub manifest: Manifest,
    pub origin: ManifestOrigin,
}

/// A fully loaded and normalized corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedCorpus {
    pub manifest: LoadedManifest,
    pub questions: Vec<Question>,
    /// Raw records discarded for lacking an identifier.
    pub dropped: usize,
}

/// Fetches the manifest and its chunks, in manifest order, one at a time.
#[derive(Clone)]
pub struct CorpusLoader {
    source: Arc<dyn CorpusSource>,
    config: BrowserConfig,
}

impl CorpusLoader {
    #[must_use]
    pub fn new(source: Arc<dyn CorpusSource>, config: BrowserConfig) -> Self {
        Self { source, config }
    }

    #[must_use]
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Fetch the manifest with revalidation.
    ///
    /// Never fails: any fetch, parse or validation problem substitutes the
    /// single-chunk fallback manifest.
    pub async fn load_manifest(&self) -> LoadedManifest {
        match self.fetch_manifest().await {
            Ok(manifest) => {
                debug!(
                    version = manifest.version,
                    chunks = manifest.chunks.len(),
                    "manifest loaded"
                );
                LoadedManifest {
                    manifest,
                    origin: ManifestOrigin::Remote,
                }
            }
            Err(err) => {
                warn!(error = %err, "manifest unavailable; using bundled sample");
                LoadedManifest {
                    manifest: Manifest::fallback(self.config.fallback_chunk_path.clone()),
                    origin: ManifestOrigin::Fallback,
                }
            }
        }
    }

    async fn fetch_manifest(&self) -> Result<Manifest, CorpusError> {
        let url = self
            .config
            .manifest_url()
            .map_err(|err| quiz_core::model::ManifestError::UnresolvablePath {
                path: self.config.manifest_path.clone(),
                reason: err.to_string(),
            })?;
        let body = self.source.fetch_text(&url, FetchMode::Revalidate).await?;
        let manifest: Manifest = parse_json(&url, &body)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Fetch every chunk named in `manifest` and concatenate their records in order.
    ///
    /// # Errors
    ///
    /// Returns the first `CorpusError` encountered; no partial corpus is returned.
    pub async fn load_all_chunks(&self, manifest: &Manifest) -> Result<Vec<RawRecord>, CorpusError> {
        let mut records = Vec::new();
        for chunk in &manifest.chunks {
            let url = chunk.resolve(&self.config.data_root)?;
            let body = self.source.fetch_text(&url, FetchMode::Cached).await?;
            let mut part: Vec<RawRecord> = parse_json(&url, &body)?;
            if let Some(expected) = chunk.count {
                if expected != part.len() as u64 {
                    warn!(chunk = %chunk.path, expected, actual = part.len(), "chunk count mismatch");
                }
            }
            records.append(&mut part);
        }
        Ok(records)
    }

    /// Manifest, then chunks, then normalization.
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if any chunk cannot be fetched or parsed.
    pub async fn load(&self) -> Result<LoadedCorpus, CorpusError> {
        let manifest = self.load_manifest().await;
        let records = self.load_all_chunks(&manifest.manifest).await?;
        let batch = normalize_all(&records);
        info!(
            chunks = manifest.manifest.chunks.len(),
            questions = batch.questions.len(),
            dropped = batch.dropped,
            fallback = manifest.origin == ManifestOrigin::Fallback,
            "corpus loaded"
        );
        Ok(LoadedCorpus {
            manifest,
            questions: batch.questions,
            dropped: batch.dropped,
        })
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(url: &Url, body: &str) -> Result<T, CorpusError> {
    serde_json::from_str(body).map_err(|source| CorpusError::Parse {
        url: url.to_string(),
        source,
    })
}
