mod marks;
mod session;
mod view;

pub use marks::{ChoiceMark, ChoiceMarks};
pub use session::{AnswerOutcome, BrowseMode, BrowseSession};
pub use view::{PageItem, PageView};
