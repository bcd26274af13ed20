use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an act in the upstream catalog.
///
/// Identifiers are 1-based and dense: id `i` names the `i`-th act of the
/// catalog, which is also the join key into the location index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActId(i64);

impl ActId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Build the identifier for a zero-based catalog slot.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index as i64 + 1)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Zero-based catalog slot, or `None` for non-positive identifiers.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()?.checked_sub(1)
    }
}

impl fmt::Display for ActId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ActId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
