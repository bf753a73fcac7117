use crate::model::{Difficulty, Module, Question};

/// Filter criteria derived from the browse controls. All fields are optional
/// and AND-combined; blank text fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub module: Option<Module>,
    pub domain: String,
    pub difficulty: Option<Difficulty>,
    pub text: String,
}

impl FilterCriteria {
    /// Prepares the criteria for repeated matching (lower-cased needles).
    #[must_use]
    pub fn matcher(&self) -> Matcher {
        Matcher {
            module: self.module,
            difficulty: self.difficulty,
            domain: needle(&self.domain),
            text: needle(&self.text),
        }
    }
}

fn needle(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

/// Compiled form of [`FilterCriteria`].
#[derive(Debug, Clone)]
pub struct Matcher {
    module: Option<Module>,
    difficulty: Option<Difficulty>,
    domain: Option<String>,
    text: Option<String>,
}

impl Matcher {
    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        if self.module.is_some_and(|module| module != question.module) {
            return false;
        }
        if self
            .difficulty
            .is_some_and(|difficulty| Some(difficulty) != question.difficulty)
        {
            return false;
        }
        if let Some(domain) = &self.domain {
            if !question.domain.to_lowercase().contains(domain.as_str()) {
                return false;
            }
        }
        if let Some(text) = &self.text {
            let in_stem = question.stem_html.to_lowercase().contains(text.as_str());
            let in_skill = question.skill_desc.to_lowercase().contains(text.as_str());
            if !in_stem && !in_skill {
                return false;
            }
        }
        true
    }
}

/// Positions of matching questions, in input order.
#[must_use]
pub fn filter_positions(questions: &[Question], criteria: &FilterCriteria) -> Vec<usize> {
    let matcher = criteria.matcher();
    questions
        .iter()
        .enumerate()
        .filter(|(_, question)| matcher.matches(question))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionId;

    fn q(id: &str, module: Module, domain: &str, difficulty: Option<Difficulty>) -> Question {
        let mut question = Question::new(QuestionId::new(id).unwrap(), module, format!("<p>{id}</p>"));
        question.domain = domain.to_string();
        question.difficulty = difficulty;
        question
    }

    fn corpus() -> Vec<Question> {
        let mut items = vec![
            q("m1", Module::Math, "Algebra", Some(Difficulty::Easy)),
            q("r1", Module::ReadingWriting, "Craft and Structure", Some(Difficulty::Hard)),
            q("m2", Module::Math, "Advanced Math", Some(Difficulty::Hard)),
            q("r2", Module::ReadingWriting, "", None),
            q("m3", Module::Math, "Geometry and Trigonometry", Some(Difficulty::Medium)),
        ];
        items[0].stem_html = "<p>Solve for X in the LINEAR equation</p>".into();
        items[1].skill_desc = "Words in Context".into();
        items
    }

    fn ids(items: &[Question], criteria: &FilterCriteria) -> Vec<String> {
        filter_positions(items, criteria)
            .into_iter()
            .map(|i| items[i].uid.to_string())
            .collect()
    }

    #[test]
    fn blank_criteria_returns_everything_in_order() {
        let items = corpus();
        let criteria = FilterCriteria::default();
        assert_eq!(ids(&items, &criteria), vec!["m1", "r1", "m2", "r2", "m3"]);
    }

    #[test]
    fn module_is_exact() {
        let items = corpus();
        let criteria = FilterCriteria {
            module: Some(Module::Math),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&items, &criteria), vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn domain_is_case_insensitive_substring_and_skips_empty() {
        let items = corpus();
        let criteria = FilterCriteria {
            domain: "MATH".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&items, &criteria), vec!["m2"]);

        let criteria = FilterCriteria {
            domain: "a".into(),
            ..FilterCriteria::default()
        };
        let found = ids(&items, &criteria);
        assert!(!found.contains(&"r2".to_string()));
    }

    #[test]
    fn difficulty_is_exact() {
        let items = corpus();
        let criteria = FilterCriteria {
            difficulty: Some(Difficulty::Hard),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&items, &criteria), vec!["r1", "m2"]);
    }

    #[test]
    fn text_matches_stem_or_skill_description() {
        let items = corpus();
        let criteria = FilterCriteria {
            text: "linear".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&items, &criteria), vec!["m1"]);

        let criteria = FilterCriteria {
            text: "words in".into(),
            ..FilterCriteria::default()
        };
        assert_eq!(ids(&items, &criteria), vec!["r1"]);
    }

    #[test]
    fn criteria_are_and_combined() {
        let items = corpus();
        let criteria = FilterCriteria {
            module: Some(Module::Math),
            difficulty: Some(Difficulty::Hard),
            domain: "advanced".into(),
            text: String::new(),
        };
        assert_eq!(ids(&items, &criteria), vec!["m2"]);

        let criteria = FilterCriteria {
            module: Some(Module::ReadingWriting),
            difficulty: Some(Difficulty::Easy),
            ..FilterCriteria::default()
        };
        assert!(filter_positions(&items, &criteria).is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_order_preserving() {
        let items = corpus();
        let criteria = FilterCriteria {
            text: "p".into(),
            ..FilterCriteria::default()
        };
        let first = filter_positions(&items, &criteria);
        let second = filter_positions(&items, &criteria);
        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));

        let refiltered: Vec<Question> = first.iter().map(|&i| items[i].clone()).collect();
        assert_eq!(filter_positions(&refiltered, &criteria).len(), refiltered.len());
    }
}
