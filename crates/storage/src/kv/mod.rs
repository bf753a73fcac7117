#[cfg(not(target_arch = "wasm32"))]
mod json_file;
#[cfg(target_arch = "wasm32")]
mod local_storage;
mod mapping;
mod progress_repo;

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
pub use json_file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use mapping::AttemptRow;
pub use progress_repo::{HISTORY_KEY, KvProgressRepository, STARRED_KEY};

use crate::repository::Storage;
#[cfg(not(target_arch = "wasm32"))]
use crate::repository::StorageError;

impl Storage {
    /// Build a `Storage` backed by the browser's `localStorage`.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn local_storage() -> Self {
        Self::over(Arc::new(LocalStorageStore::new()))
    }

    /// Build a `Storage` backed by a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file location cannot be prepared.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn json_file(path: impl Into<std::path::PathBuf>) -> Result<Self, StorageError> {
        Ok(Self::over(Arc::new(JsonFileStore::open(path)?)))
    }
}
