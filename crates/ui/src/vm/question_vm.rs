use quiz_core::model::{Question, QuestionId, difficulty_label};
use services::{ChoiceMark, PageItem};

use super::html::sanitize_html;

pub const NO_EXPLANATION: &str = "No explanation";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub letter: String,
    pub html: String,
    pub class: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionCardVm {
    pub id: QuestionId,
    pub dom_id: String,
    pub module_label: &'static str,
    pub domain: Option<String>,
    pub difficulty_label: &'static str,
    pub skill: Option<String>,
    pub score_band: Option<String>,
    pub starred: bool,
    pub star_label: &'static str,
    pub stem_html: String,
    pub choices: Vec<ChoiceVm>,
    pub explanation_html: Option<String>,
}

impl QuestionCardVm {
    #[must_use]
    pub fn is_free_response(&self) -> bool {
        self.choices.is_empty()
    }
}

#[must_use]
pub fn star_label(starred: bool) -> &'static str {
    if starred { "★ Starred" } else { "☆ Star" }
}

#[must_use]
pub fn choice_letter(index: usize) -> String {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or_else(|| (index + 1).to_string(), |i| char::from(b'A' + i).to_string())
}

fn choice_class(mark: Option<ChoiceMark>) -> &'static str {
    match mark {
        Some(ChoiceMark::Correct) => "choice choice--correct",
        Some(ChoiceMark::Incorrect) => "choice choice--incorrect",
        None => "choice",
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[must_use]
pub fn map_question_card(item: &PageItem<'_>) -> QuestionCardVm {
    let question: &Question = item.question;
    let choices = question
        .choices
        .as_deref()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, html)| ChoiceVm {
            index,
            letter: choice_letter(index),
            html: sanitize_html(html),
            class: choice_class(item.marks.get(index).copied().flatten()),
        })
        .collect();

    QuestionCardVm {
        id: question.uid.clone(),
        dom_id: format!("q-{}", question.uid),
        module_label: question.module.label(),
        domain: non_blank(&question.domain),
        difficulty_label: difficulty_label(question.difficulty),
        skill: non_blank(&question.skill_desc),
        score_band: question.score_band.as_deref().and_then(non_blank),
        starred: item.starred,
        star_label: star_label(item.starred),
        stem_html: sanitize_html(&question.stem_html),
        choices,
        explanation_html: question
            .has_explanation()
            .then(|| sanitize_html(&question.explanation_html)),
    }
}
