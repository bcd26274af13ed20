//! Per-act field matching.
//!
//! Every act is checked against five independent predicates. There is no
//! short-circuit: one act can satisfy several predicates, and each
//! satisfied predicate yields its own [`Hit`].
//!
//! Each predicate folds case and whitespace differently:
//!
//! | Predicate    | Field normalisation               | Term normalisation   |
//! |--------------|-----------------------------------|----------------------|
//! | `Year`       | exact integer equality            | parsed as integer    |
//! | `Name`       | trimmed, lower-cased              | trimmed, lower-cased |
//! | `FirstAlbum` | none (case-sensitive)             | none                 |
//! | `Members`    | lower-cased                       | lower-cased          |
//! | `Locations`  | lower-cased, `_` read as a space  | lower-cased, `_` read as a space |

use std::collections::BTreeSet;

use encore_core::model::{Act, ActId};

use crate::location::LocationSnapshot;
use crate::query::SearchTerm;

/// One of the five match rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Year,
    Name,
    FirstAlbum,
    Members,
    Locations,
}

impl Predicate {
    /// How a hit from this predicate is merged into the result.
    #[must_use]
    pub const fn dedup(self) -> DedupPolicy {
        match self {
            Self::Year | Self::Name | Self::FirstAlbum => DedupPolicy::Always,
            Self::Members | Self::Locations => DedupPolicy::UnlessNamePresent,
        }
    }
}

/// Append policy for a predicate's hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupPolicy {
    /// Append on every hit, even if the act is already in the result.
    Always,
    /// Append only if no act with the same name is already in the result.
    UnlessNamePresent,
}

/// A predicate that fired, and the catalog position of the act it selects.
///
/// For location hits the position need not be the evaluated act's own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub predicate: Predicate,
    pub id: ActId,
}

/// Evaluates acts against one search term.
///
/// The normalised forms of the term are computed once up front.
#[derive(Debug, Clone)]
pub struct FieldMatcher<'a> {
    term: &'a SearchTerm,
    year: Option<i32>,
    trimmed_lower: String,
    lower: String,
    location_term: String,
}

impl<'a> FieldMatcher<'a> {
    #[must_use]
    pub fn new(term: &'a SearchTerm) -> Self {
        let lower = term.as_str().to_lowercase();
        Self {
            term,
            year: term.as_year(),
            trimmed_lower: term.as_str().trim().to_lowercase(),
            location_term: lower.replace('_', " "),
            lower,
        }
    }

    #[must_use]
    pub fn matches_year(&self, act: &Act) -> bool {
        self.year == Some(act.creation_date)
    }

    #[must_use]
    pub fn matches_name(&self, act: &Act) -> bool {
        act.name.trim().to_lowercase().contains(&self.trimmed_lower)
    }

    #[must_use]
    pub fn matches_first_album(&self, act: &Act) -> bool {
        act.first_album.contains(self.term.as_str())
    }

    #[must_use]
    pub fn matches_member(&self, member: &str) -> bool {
        member.to_lowercase().contains(&self.lower)
    }

    #[must_use]
    pub fn matches_location(&self, location: &str) -> bool {
        location
            .to_lowercase()
            .replace('_', " ")
            .contains(&self.location_term)
    }

    /// Catalog positions, within `1..=catalog_len`, of every record in the
    /// snapshot with a matching location.
    ///
    /// The scan covers the whole snapshot, not just one act's record, so a
    /// location hit can select an act other than the one being evaluated.
    #[must_use]
    pub fn matching_positions(
        &self,
        locations: &LocationSnapshot,
        catalog_len: usize,
    ) -> BTreeSet<ActId> {
        locations
            .iter()
            .filter(|(id, location)| {
                id.index().is_some_and(|index| index < catalog_len)
                    && self.matches_location(location)
            })
            .map(|(id, _)| id)
            .collect()
    }

    /// Run all five predicates for the act at `id`.
    ///
    /// Hits come back in predicate order. The member predicate yields one
    /// hit per matching member; the location predicate yields one hit per
    /// position in `location_positions`, in ascending order.
    #[must_use]
    pub fn evaluate(
        &self,
        id: ActId,
        act: &Act,
        location_positions: &BTreeSet<ActId>,
    ) -> Vec<Hit> {
        let mut hits = Vec::new();
        let hit = |predicate| Hit { predicate, id };

        if self.matches_year(act) {
            hits.push(hit(Predicate::Year));
        }
        if self.matches_name(act) {
            hits.push(hit(Predicate::Name));
        }
        if self.matches_first_album(act) {
            hits.push(hit(Predicate::FirstAlbum));
        }
        hits.extend(
            act.members
                .iter()
                .filter(|member| self.matches_member(member))
                .map(|_| hit(Predicate::Members)),
        );
        hits.extend(location_positions.iter().map(|&position| Hit {
            predicate: Predicate::Locations,
            id: position,
        }));

        hits
    }
}
