use std::collections::BTreeSet;

use crate::model::{Difficulty, Module, Question};

/// Distinct values present in the corpus, used to populate filter selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub modules: Vec<Module>,
    pub domains: Vec<String>,
    pub difficulties: Vec<Difficulty>,
}

impl Facets {
    #[must_use]
    pub fn from_questions(questions: &[Question]) -> Self {
        let mut modules = BTreeSet::new();
        let mut domains = BTreeSet::new();
        let mut difficulties = BTreeSet::new();

        for question in questions {
            modules.insert(question.module);
            if let Some(difficulty) = question.difficulty {
                difficulties.insert(difficulty);
            }
            if !question.domain.trim().is_empty() {
                domains.insert(question.domain.clone());
            }
        }

        Self {
            modules: modules.into_iter().collect(),
            domains: domains.into_iter().collect(),
            difficulties: difficulties.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;

    #[test]
    fn collects_sorted_distinct_non_empty_values() {
        let mut a = Question::new(QuestionId::new("a").unwrap(), Module::Math, "");
        a.domain = "Geometry".into();
        a.difficulty = Some(Difficulty::Hard);
        let mut b = Question::new(QuestionId::new("b").unwrap(), Module::Math, "");
        b.domain = "Algebra".into();
        b.skill_desc = "Linear equations".into();
        b.difficulty = Some(Difficulty::Easy);
        let mut c = Question::new(QuestionId::new("c").unwrap(), Module::ReadingWriting, "");
        c.domain = "Algebra".into();

        let facets = Facets::from_questions(&[a, b, c]);
        assert_eq!(facets.modules, vec![Module::Math, Module::ReadingWriting]);
        assert_eq!(facets.domains, vec!["Algebra", "Geometry"]);
        assert_eq!(facets.difficulties, vec![Difficulty::Easy, Difficulty::Hard]);
    }
}
