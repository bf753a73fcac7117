#![forbid(unsafe_code)]

pub mod kv;
pub mod repository;

pub use repository::{InMemoryStore, KeyValueStore, ProgressRepository, Storage, StorageError};
