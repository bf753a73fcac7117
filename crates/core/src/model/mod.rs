mod attempt;
mod ids;
mod manifest;
mod question;
mod starred;

pub use attempt::{AttemptRecord, HISTORY_LIMIT, HistoryLog};
pub use ids::{ParseIdError, QuestionId};
pub use manifest::{ChunkRef, Manifest, ManifestError};
pub use question::{Difficulty, Module, Question, difficulty_label};
pub use starred::StarredSet;
