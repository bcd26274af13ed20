//! Result accumulation.

use encore_core::model::Act;
use serde::Serialize;

use crate::matcher::{DedupPolicy, Predicate};

/// Ordered search result.
///
/// This is a sequence, not a set: an act that satisfies more than one of
/// the year, name and debut-album predicates appears once per predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    acts: Vec<Act>,
}

impl SearchResults {
    #[must_use]
    pub fn len(&self) -> usize {
        self.acts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.acts.is_empty()
    }

    #[must_use]
    pub fn acts(&self) -> &[Act] {
        &self.acts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Act> {
        self.acts.iter()
    }

    #[must_use]
    pub fn into_acts(self) -> Vec<Act> {
        self.acts
    }

    /// Names of the matched acts, in result order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.acts.iter().map(|act| act.name.as_str()).collect()
    }
}

impl IntoIterator for SearchResults {
    type Item = Act;
    type IntoIter = std::vec::IntoIter<Act>;

    fn into_iter(self) -> Self::IntoIter {
        self.acts.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a Act;
    type IntoIter = std::slice::Iter<'a, Act>;

    fn into_iter(self) -> Self::IntoIter {
        self.acts.iter()
    }
}

/// Collects matched acts, applying each predicate's [`DedupPolicy`].
///
/// Identity for deduplication is the act's name, not its id: two distinct
/// acts sharing a name count as the same act.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    acts: Vec<Act>,
}

impl ResultAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit of `predicate` on `act`.
    ///
    /// Returns `true` if the act was appended.
    pub fn record(&mut self, predicate: Predicate, act: &Act) -> bool {
        if predicate.dedup() == DedupPolicy::UnlessNamePresent && self.contains_name(&act.name) {
            return false;
        }
        self.acts.push(act.clone());
        true
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.acts.iter().any(|act| act.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.acts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.acts.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> SearchResults {
        SearchResults { acts: self.acts }
    }
}
