use quiz_core::model::{Difficulty, Module};
use quiz_core::{Facets, FilterCriteria};
use services::{BrowseMode, BrowseSession, PageView};

use super::question_vm::{QuestionCardVm, map_question_card};

pub const NO_MATCHES: &str = "No questions match these filters.";
pub const NO_STARRED: &str = "No starred questions yet.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOptionVm {
    pub value: String,
    pub label: String,
}

impl SelectOptionVm {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Current values and options of the filter controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterControlsVm {
    pub text: String,
    pub module: String,
    pub domain: String,
    pub difficulty: String,
    pub modules: Vec<SelectOptionVm>,
    pub domains: Vec<SelectOptionVm>,
    pub difficulties: Vec<SelectOptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowsePageVm {
    pub mode_label: &'static str,
    pub page_label: String,
    pub count_label: String,
    pub has_prev: bool,
    pub has_next: bool,
    pub empty_message: Option<&'static str>,
    pub cards: Vec<QuestionCardVm>,
}

#[must_use]
pub fn mode_label(mode: BrowseMode) -> &'static str {
    match mode {
        BrowseMode::Filtered => "All questions",
        BrowseMode::Shuffled => "Shuffled",
        BrowseMode::Starred => "Starred",
    }
}

#[must_use]
pub fn map_browse_page(view: &PageView<'_>) -> BrowsePageVm {
    let empty_message = view.items.is_empty().then_some(match view.mode {
        BrowseMode::Starred => NO_STARRED,
        BrowseMode::Filtered | BrowseMode::Shuffled => NO_MATCHES,
    });
    let noun = if view.corpus_size == 1 { "question" } else { "questions" };

    BrowsePageVm {
        mode_label: mode_label(view.mode),
        page_label: format!("Page {} of {}", view.page, view.total_pages),
        count_label: format!("{} of {} {noun}", view.total_matches, view.corpus_size),
        has_prev: view.has_prev(),
        has_next: view.has_next(),
        empty_message,
        cards: view.items.iter().map(map_question_card).collect(),
    }
}

#[must_use]
pub fn map_filter_controls(facets: &Facets, criteria: &FilterCriteria) -> FilterControlsVm {
    let mut modules = vec![SelectOptionVm::new("", "All modules")];
    modules.extend(
        facets
            .modules
            .iter()
            .map(|module| SelectOptionVm::new(module.code(), module.label())),
    );

    let mut domains = vec![SelectOptionVm::new("", "All domains")];
    domains.extend(
        facets
            .domains
            .iter()
            .map(|domain| SelectOptionVm::new(domain.as_str(), domain.as_str())),
    );

    let mut difficulties = vec![SelectOptionVm::new("", "Any difficulty")];
    difficulties.extend(
        facets
            .difficulties
            .iter()
            .map(|difficulty| SelectOptionVm::new(difficulty.code(), difficulty.label())),
    );

    FilterControlsVm {
        text: criteria.text.clone(),
        module: criteria.module.map(Module::code).unwrap_or_default().to_string(),
        domain: criteria.domain.clone(),
        difficulty: criteria
            .difficulty
            .map(Difficulty::code)
            .unwrap_or_default()
            .to_string(),
        modules,
        domains,
        difficulties,
    }
}

/// One control edit, applied on top of the current criteria.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterEdit {
    Text(String),
    Module(String),
    Domain(String),
    Difficulty(String),
}

/// Criteria after applying `edit`. Unknown select values clear that criterion.
#[must_use]
pub fn apply_filter_edit(current: &FilterCriteria, edit: FilterEdit) -> FilterCriteria {
    let mut next = current.clone();
    match edit {
        FilterEdit::Text(text) => next.text = text,
        FilterEdit::Module(code) => next.module = Module::from_code(&code),
        FilterEdit::Domain(domain) => next.domain = domain,
        FilterEdit::Difficulty(code) => next.difficulty = Difficulty::from_code(&code),
    }
    next
}

/// Page and controls in one projection, recomputed on every render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowseScreenVm {
    pub controls: FilterControlsVm,
    pub page: BrowsePageVm,
}

#[must_use]
pub fn map_browse_screen(session: &BrowseSession) -> BrowseScreenVm {
    BrowseScreenVm {
        controls: map_filter_controls(session.facets(), session.criteria()),
        page: map_browse_page(&session.page_view()),
    }
}
