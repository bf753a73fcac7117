use quiz_core::model::Question;

use super::marks::ChoiceMark;
use super::session::BrowseMode;

/// One question on the current page, with its interaction state.
///
/// Presentation-agnostic: labels and formatting belong to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageItem<'a> {
    pub question: &'a Question,
    pub starred: bool,
    /// One entry per choice; `None` when the choice was not clicked.
    pub marks: Vec<Option<ChoiceMark>>,
}

/// Snapshot of the visible page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub mode: BrowseMode,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub corpus_size: usize,
    pub items: Vec<PageItem<'a>>,
}

impl PageView<'_> {
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
