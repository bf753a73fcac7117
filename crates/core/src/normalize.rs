//! Maps heterogeneous upstream question records onto [`Question`].
//!
//! Every canonical field has an ordered list of source field candidates; the
//! first candidate holding a non-empty value wins. Data producers must keep
//! emitting one of these names to stay compatible.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{Difficulty, Module, Question, QuestionId};

/// A raw record as found in a chunk file.
pub type RawRecord = Value;

pub const UID_FIELDS: &[&str] = &["uId", "id", "questionId"];
pub const QUESTION_ID_FIELDS: &[&str] = &["questionId", "id", "uId"];
pub const MODULE_FIELDS: &[&str] = &["module"];
pub const CATEGORY_FIELDS: &[&str] = &["category"];
pub const DOMAIN_FIELDS: &[&str] = &["primary_class_cd_desc", "domain"];
pub const SKILL_CODE_FIELDS: &[&str] = &["skill_cd"];
pub const SKILL_DESC_FIELDS: &[&str] = &["skill_desc"];
pub const DIFFICULTY_FIELDS: &[&str] = &["difficulty", "diff"];
pub const SCORE_BAND_FIELDS: &[&str] = &["score_band_range_cd", "band"];
pub const STEM_FIELDS: &[&str] = &["stem_html", "stem", "question_html"];
pub const CHOICES_FIELDS: &[&str] = &["choices", "options"];
pub const CORRECT_INDEX_FIELDS: &[&str] = &["correct_choice_index", "answer_index"];
pub const EXPLANATION_FIELDS: &[&str] = &["explanation_html", "explanation"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NormalizeError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("record has no usable identifier (uId, id, questionId)")]
    MissingId,
}

/// Result of normalizing a whole chunk (or corpus).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedBatch {
    pub questions: Vec<Question>,
    pub dropped: usize,
}

/// Normalizes a single raw record.
///
/// # Errors
///
/// Returns `NormalizeError::MissingId` when no identifier candidate is
/// present, and `NormalizeError::NotAnObject` for non-object records.
pub fn normalize(raw: &RawRecord) -> Result<Question, NormalizeError> {
    let record = raw.as_object().ok_or(NormalizeError::NotAnObject)?;

    let uid = first_text(record, UID_FIELDS)
        .and_then(QuestionId::new)
        .ok_or(NormalizeError::MissingId)?;
    let question_id = first_text(record, QUESTION_ID_FIELDS).unwrap_or_else(|| uid.to_string());

    Ok(Question {
        question_id,
        module: resolve_module(record),
        domain: first_text(record, DOMAIN_FIELDS).unwrap_or_default(),
        skill_code: first_text(record, SKILL_CODE_FIELDS).unwrap_or_default(),
        skill_desc: first_text(record, SKILL_DESC_FIELDS).unwrap_or_default(),
        difficulty: first_text(record, DIFFICULTY_FIELDS).and_then(|raw| parse_difficulty(&raw)),
        score_band: first_text(record, SCORE_BAND_FIELDS),
        stem_html: first_text(record, STEM_FIELDS).unwrap_or_default(),
        choices: first_choices(record, CHOICES_FIELDS),
        correct_choice_index: first_index(record, CORRECT_INDEX_FIELDS),
        explanation_html: first_text(record, EXPLANATION_FIELDS).unwrap_or_default(),
        uid,
    })
}

/// Normalizes records in order, dropping those without an identifier.
#[must_use]
pub fn normalize_all<'a>(raw: impl IntoIterator<Item = &'a RawRecord>) -> NormalizedBatch {
    let mut batch = NormalizedBatch::default();
    for record in raw {
        match normalize(record) {
            Ok(question) => batch.questions.push(question),
            Err(_) => batch.dropped += 1,
        }
    }
    batch
}

fn resolve_module(record: &Map<String, Value>) -> Module {
    if let Some(explicit) = first_text(record, MODULE_FIELDS) {
        let lowered = explicit.to_lowercase();
        return Module::from_code(&lowered).unwrap_or_else(|| module_from_keyword(&lowered));
    }
    let category = first_text(record, CATEGORY_FIELDS)
        .unwrap_or_default()
        .to_lowercase();
    module_from_keyword(&category)
}

fn module_from_keyword(lowered: &str) -> Module {
    if lowered.contains("math") {
        Module::Math
    } else {
        Module::ReadingWriting
    }
}

fn parse_difficulty(raw: &str) -> Option<Difficulty> {
    let trimmed = raw.trim();
    Difficulty::from_code(trimmed).or_else(|| match trimmed.to_lowercase().as_str() {
        "easy" => Some(Difficulty::Easy),
        "medium" => Some(Difficulty::Medium),
        "hard" => Some(Difficulty::Hard),
        _ => None,
    })
}

/// Text form of a scalar; blank strings, nulls, booleans and containers are empty.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn first_text(record: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields
        .iter()
        .find_map(|field| record.get(*field).and_then(scalar_text))
}

fn first_choices(record: &Map<String, Value>, fields: &[&str]) -> Option<Vec<String>> {
    fields.iter().find_map(|field| match record.get(*field) {
        Some(Value::Array(items)) if !items.is_empty() => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    })
}

/// First candidate holding a non-negative integer; non-numeric values are skipped.
fn first_index(record: &Map<String, Value>, fields: &[&str]) -> Option<usize> {
    fields
        .iter()
        .find_map(|field| record.get(*field).and_then(as_index))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn as_index(value: &Value) -> Option<usize> {
    let number = value.as_number()?;
    if let Some(n) = number.as_u64() {
        return usize::try_from(n).ok();
    }
    let f = number.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
        return Some(f as usize);
    }
    None
}
