use std::collections::{BTreeMap, HashMap};

use quiz_core::model::QuestionId;

/// Correctness marking applied to a clicked choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceMark {
    Correct,
    Incorrect,
}

impl ChoiceMark {
    #[must_use]
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }
}

/// Markings on the visible page. Additive: selecting another choice never
/// clears an earlier marking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChoiceMarks {
    by_question: HashMap<QuestionId, BTreeMap<usize, ChoiceMark>>,
}

impl ChoiceMarks {
    pub fn mark(&mut self, id: &QuestionId, choice: usize, mark: ChoiceMark) {
        self.by_question
            .entry(id.clone())
            .or_default()
            .insert(choice, mark);
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId, choice: usize) -> Option<ChoiceMark> {
        self.by_question
            .get(id)
            .and_then(|marks| marks.get(&choice))
            .copied()
    }

    pub fn clear(&mut self) {
        self.by_question.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_question.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_accumulate_per_question() {
        let id = QuestionId::new("q").unwrap();
        let mut marks = ChoiceMarks::default();
        marks.mark(&id, 0, ChoiceMark::Incorrect);
        marks.mark(&id, 2, ChoiceMark::Correct);
        assert_eq!(marks.get(&id, 0), Some(ChoiceMark::Incorrect));
        assert_eq!(marks.get(&id, 2), Some(ChoiceMark::Correct));
        assert_eq!(marks.get(&id, 1), None);
        marks.clear();
        assert!(marks.is_empty());
    }
}
