use std::collections::HashMap;
use std::sync::Arc;

use quiz_core::filter::filter_positions;
use quiz_core::model::{AttemptRecord, Question, QuestionId};
use quiz_core::{Facets, FilterCriteria, Pager};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::marks::{ChoiceMark, ChoiceMarks};
use super::view::{PageItem, PageView};
use crate::error::SessionError;
use crate::progress::ProgressTracker;

/// How the current subset was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowseMode {
    Filtered,
    Shuffled,
    Starred,
}

/// Result of clicking an answer choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub choice: usize,
    pub correct: bool,
    pub attempt: AttemptRecord,
}

/// Explicit browse state: the loaded corpus, the current subset and page,
/// and the user's persisted progress.
///
/// Every transition (filter change, page navigation, mode action) replaces
/// the subset or page in place; nothing here is ambient or global.
#[derive(Clone)]
pub struct BrowseSession {
    corpus: Arc<[Question]>,
    index: HashMap<QuestionId, usize>,
    facets: Facets,
    criteria: FilterCriteria,
    mode: BrowseMode,
    subset: Vec<usize>,
    pager: Pager,
    marks: ChoiceMarks,
    progress: ProgressTracker,
}

impl BrowseSession {
    /// Initial state: subset is the full corpus, page 1.
    #[must_use]
    pub fn new(questions: Vec<Question>, progress: ProgressTracker, page_size: usize) -> Self {
        let mut index = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            index.entry(question.uid.clone()).or_insert(position);
        }
        let facets = Facets::from_questions(&questions);
        let subset = (0..questions.len()).collect();
        Self {
            corpus: questions.into(),
            index,
            facets,
            criteria: FilterCriteria::default(),
            mode: BrowseMode::Filtered,
            subset,
            pager: Pager::new(page_size),
            marks: ChoiceMarks::default(),
            progress,
        }
    }

    #[must_use]
    pub fn corpus(&self) -> &[Question] {
        &self.corpus
    }

    #[must_use]
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn mode(&self) -> BrowseMode {
        self.mode
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    #[must_use]
    pub fn page(&self) -> usize {
        self.pager.page()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.subset.len())
    }

    /// Questions in the current subset, in order.
    pub fn subset(&self) -> impl Iterator<Item = &Question> {
        self.subset.iter().map(|&position| &self.corpus[position])
    }

    #[must_use]
    pub fn subset_len(&self) -> usize {
        self.subset.len()
    }

    /// Questions on the current page.
    #[must_use]
    pub fn current_page(&self) -> Vec<&Question> {
        self.pager
            .slice(&self.subset)
            .iter()
            .map(|&position| &self.corpus[position])
            .collect()
    }

    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.index.get(id).map(|&position| &self.corpus[position])
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Recompute the subset from `criteria` and return to page 1.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        self.subset = filter_positions(&self.corpus, &criteria);
        self.criteria = criteria;
        self.mode = BrowseMode::Filtered;
        self.reset_page();
        debug!(matches = self.subset.len(), "filter applied");
    }

    pub fn reset_filters(&mut self) {
        self.apply_filter(FilterCriteria::default());
    }

    /// Move to `page`, clamped into `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize) {
        let before = self.pager.page();
        self.pager.go_to(page, self.subset.len());
        if self.pager.page() != before {
            self.marks.clear();
        }
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.pager.page().saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to_page(self.pager.page().saturating_sub(1));
    }

    /// Present one page of questions drawn uniformly at random from the
    /// whole corpus. The stored corpus order is left untouched.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut positions: Vec<usize> = (0..self.corpus.len()).collect();
        positions.shuffle(rng);
        positions.truncate(self.pager.page_size());
        self.subset = positions;
        self.mode = BrowseMode::Shuffled;
        self.reset_page();
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Subset = corpus entries whose id is starred, in corpus order.
    pub fn show_starred(&mut self) {
        let starred = self.progress.starred();
        self.subset = self
            .corpus
            .iter()
            .enumerate()
            .filter(|(_, question)| starred.contains(&question.uid))
            .map(|(position, _)| position)
            .collect();
        self.mode = BrowseMode::Starred;
        self.reset_page();
    }

    fn reset_page(&mut self) {
        self.pager.reset();
        self.marks.clear();
    }

    //
    // ─── INTERACTIONS ──────────────────────────────────────────────────────────
    //

    /// Flip starred membership and persist it. The subset is not recomputed,
    /// so an un-starred question stays visible until the next mode action.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownQuestion` for ids outside the corpus and
    /// `SessionError::Storage` when persisting fails.
    pub fn toggle_star(&mut self, id: &QuestionId) -> Result<bool, SessionError> {
        if !self.index.contains_key(id) {
            return Err(SessionError::UnknownQuestion(id.to_string()));
        }
        self.progress.toggle_star(id)
    }

    /// Mark the clicked choice and append an attempt to the history.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` for unknown questions, free-response questions,
    /// out-of-range choices, or when persisting the history fails (the
    /// marking is applied regardless).
    pub fn answer(&mut self, id: &QuestionId, choice: usize) -> Result<AnswerOutcome, SessionError> {
        let question = self
            .question(id)
            .ok_or_else(|| SessionError::UnknownQuestion(id.to_string()))?;
        let choice_count = question.choices.as_ref().map_or(0, Vec::len);
        if choice_count == 0 {
            return Err(SessionError::NoChoices(id.to_string()));
        }
        if choice >= choice_count {
            return Err(SessionError::ChoiceOutOfRange {
                question: id.to_string(),
                choice,
            });
        }

        let correct = question.is_correct_choice(choice);
        self.marks.mark(id, choice, ChoiceMark::from_correct(correct));
        let attempt = self.progress.record_attempt(id, correct)?;
        Ok(AnswerOutcome {
            choice,
            correct,
            attempt,
        })
    }

    /// Projection of the current page for rendering.
    #[must_use]
    pub fn page_view(&self) -> PageView<'_> {
        let items = self
            .current_page()
            .into_iter()
            .map(|question| {
                let choice_count = question.choices.as_ref().map_or(0, Vec::len);
                PageItem {
                    question,
                    starred: self.progress.is_starred(&question.uid),
                    marks: (0..choice_count)
                        .map(|choice| self.marks.get(&question.uid, choice))
                        .collect(),
                }
            })
            .collect();

        PageView {
            mode: self.mode,
            page: self.pager.page(),
            total_pages: self.total_pages(),
            total_matches: self.subset.len(),
            corpus_size: self.corpus.len(),
            items,
        }
    }
}
