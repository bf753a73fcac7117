use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ManifestError {
    #[error("manifest lists no chunks")]
    NoChunks,

    #[error("chunk path cannot be empty")]
    EmptyChunkPath,

    #[error("chunk path `{path}` cannot be resolved: {reason}")]
    UnresolvablePath { path: String, reason: String },
}

//
// ─── MANIFEST ──────────────────────────────────────────────────────────────────
//

/// Location of one chunk, relative to the data root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRef {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl ChunkRef {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            count: None,
        }
    }

    /// Resolves this chunk against the data root.
    ///
    /// # Errors
    ///
    /// Returns `ManifestError` when the path is blank or not joinable.
    pub fn resolve(&self, data_root: &Url) -> Result<Url, ManifestError> {
        let path = self.path.trim();
        if path.is_empty() {
            return Err(ManifestError::EmptyChunkPath);
        }
        data_root
            .join(path)
            .map_err(|err| ManifestError::UnresolvablePath {
                path: self.path.clone(),
                reason: err.to_string(),
            })
    }
}

/// Top-level descriptor enumerating the corpus chunks, in load order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    pub chunks: Vec<ChunkRef>,
}

impl Manifest {
    /// Single-chunk manifest pointing at the bundled sample dataset.
    #[must_use]
    pub fn fallback(sample_path: impl Into<String>) -> Self {
        Self {
            version: 1,
            count: None,
            chunks: vec![ChunkRef::new(sample_path)],
        }
    }

    /// # Errors
    ///
    /// Returns `ManifestError::NoChunks` for an empty chunk list.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.chunks.is_empty() {
            return Err(ManifestError::NoChunks);
        }
        if self.chunks.iter().any(|chunk| chunk.path.trim().is_empty()) {
            return Err(ManifestError::EmptyChunkPath);
        }
        Ok(())
    }
}
