use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::QuestionId;

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// Top-level subject category of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Module {
    #[serde(rename = "math")]
    Math,
    #[serde(rename = "reading-writing")]
    ReadingWriting,
}

impl Module {
    pub const ALL: [Module; 2] = [Module::Math, Module::ReadingWriting];

    /// Canonical wire value (`"math"` / `"reading-writing"`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Module::Math => "math",
            Module::ReadingWriting => "reading-writing",
        }
    }

    /// Parses a canonical module code. Matching is exact.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "math" => Some(Module::Math),
            "reading-writing" => Some(Module::ReadingWriting),
            _ => None,
        }
    }

    /// Human label shown on badges and selectors.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Module::Math => "Math",
            Module::ReadingWriting => "Reading & Writing",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty code carried by the upstream data (`E`, `M`, `H`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "E")]
    Easy,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "H")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Difficulty::Easy => "E",
            Difficulty::Medium => "M",
            Difficulty::Hard => "H",
        }
    }

    /// Parses a difficulty code. Matching is exact; anything else is unset.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "E" => Some(Difficulty::Easy),
            "M" => Some(Difficulty::Medium),
            "H" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Badge text for an optional difficulty; unset renders as an em-dash.
#[must_use]
pub fn difficulty_label(difficulty: Option<Difficulty>) -> &'static str {
    difficulty.map_or("—", Difficulty::label)
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A normalized multiple-choice (or free-response) question.
///
/// Built once by normalization and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub uid: QuestionId,
    pub question_id: String,
    pub module: Module,
    pub domain: String,
    pub skill_code: String,
    pub skill_desc: String,
    pub difficulty: Option<Difficulty>,
    pub score_band: Option<String>,
    pub stem_html: String,
    pub choices: Option<Vec<String>>,
    pub correct_choice_index: Option<usize>,
    pub explanation_html: String,
}

impl Question {
    /// Minimal question used by tests and fixtures; other fields are empty.
    #[must_use]
    pub fn new(uid: QuestionId, module: Module, stem_html: impl Into<String>) -> Self {
        Self {
            question_id: uid.as_str().to_owned(),
            uid,
            module,
            domain: String::new(),
            skill_code: String::new(),
            skill_desc: String::new(),
            difficulty: None,
            score_band: None,
            stem_html: stem_html.into(),
            choices: None,
            correct_choice_index: None,
            explanation_html: String::new(),
        }
    }

    #[must_use]
    pub fn is_free_response(&self) -> bool {
        self.choices.as_ref().is_none_or(Vec::is_empty)
    }

    /// Returns whether `choice` is the correct option.
    ///
    /// Questions without a known correct index never report a correct choice.
    #[must_use]
    pub fn is_correct_choice(&self, choice: usize) -> bool {
        self.correct_choice_index == Some(choice)
    }

    #[must_use]
    pub fn has_explanation(&self) -> bool {
        !self.explanation_html.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question::new(QuestionId::new("q1").unwrap(), Module::Math, "<p>1+1?</p>")
    }

    #[test]
    fn difficulty_labels_map_codes() {
        assert_eq!(difficulty_label(Some(Difficulty::Easy)), "Easy");
        assert_eq!(difficulty_label(Some(Difficulty::Medium)), "Medium");
        assert_eq!(difficulty_label(Some(Difficulty::Hard)), "Hard");
        assert_eq!(difficulty_label(None), "—");
    }

    #[test]
    fn difficulty_codes_are_exact() {
        assert_eq!(Difficulty::from_code("H"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_code("h"), None);
        assert_eq!(Difficulty::from_code(""), None);
    }

    #[test]
    fn module_codes_round_trip_through_serde() {
        let json = serde_json::to_string(&Module::ReadingWriting).unwrap();
        assert_eq!(json, "\"reading-writing\"");
        assert_eq!(Module::from_code("math"), Some(Module::Math));
        assert_eq!(Module::from_code("Math"), None);
    }

    #[test]
    fn correct_choice_requires_known_index() {
        let mut q = question();
        q.choices = Some(vec!["1".into(), "2".into()]);
        assert!(!q.is_correct_choice(1));
        q.correct_choice_index = Some(1);
        assert!(q.is_correct_choice(1));
        assert!(!q.is_correct_choice(0));
    }

    #[test]
    fn free_response_when_choices_missing_or_empty() {
        let mut q = question();
        assert!(q.is_free_response());
        q.choices = Some(Vec::new());
        assert!(q.is_free_response());
        q.choices = Some(vec!["a".into()]);
        assert!(!q.is_free_response());
    }
}
