mod loader;
mod source;

pub use loader::{CorpusLoader, LoadedCorpus, LoadedManifest, ManifestOrigin};
pub use source::{CorpusSource, FetchMode, HttpCorpusSource, StaticCorpusSource};
