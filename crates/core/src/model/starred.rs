use std::collections::BTreeSet;

use crate::model::ids::QuestionId;

/// User-curated set of favorited question ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StarredSet {
    ids: BTreeSet<QuestionId>,
}

impl StarredSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.ids.contains(id)
    }

    /// Flips membership of `id`. Returns `true` if the id is now starred.
    pub fn toggle(&mut self, id: &QuestionId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionId> {
        self.ids.iter()
    }
}

impl FromIterator<QuestionId> for StarredSet {
    fn from_iter<I: IntoIterator<Item = QuestionId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
