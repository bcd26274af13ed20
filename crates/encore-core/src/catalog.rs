//! Read-only catalog snapshot.
//!
//! The catalog is materialised once (usually from the upstream `/artists`
//! endpoint) and then shared, unmodified, by every search and browse
//! request for the lifetime of the process.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{Act, ActId};

/// Default number of acts shown per browse page.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Source of the ordered act catalog.
///
/// The returned slice must stay stable for the duration of a search.
pub trait CatalogStore: Send + Sync {
    fn all(&self) -> &[Act];
}

/// An immutable, ordered list of acts.
///
/// Position `i` (zero-based) holds the act whose [`ActId`] is `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    acts: Vec<Act>,
}

impl Catalog {
    #[must_use]
    pub fn new(acts: Vec<Act>) -> Self {
        let misplaced = acts
            .iter()
            .enumerate()
            .filter(|(index, act)| act.id != ActId::from_index(*index))
            .count();
        if misplaced > 0 {
            log::warn!(
                "Catalog has {} acts whose id does not match their position",
                misplaced
            );
        }
        Self { acts }
    }

    /// Decode a catalog from the upstream JSON array of acts.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let acts: Vec<Act> = serde_json::from_slice(bytes)?;
        Ok(Self::new(acts))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.acts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.acts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Act> {
        self.acts.iter()
    }

    /// Look up the act at a 1-based catalog position.
    #[must_use]
    pub fn get(&self, id: ActId) -> Option<&Act> {
        self.acts.get(id.index()?)
    }

    /// Like [`Catalog::get`], but reports a missing act as an error.
    pub fn require(&self, id: ActId) -> Result<&Act> {
        self.get(id).ok_or_else(|| Error::NotFound {
            entity: "act",
            id: id.to_string(),
        })
    }

    /// Slice out one browse page.
    ///
    /// `page` is 1-based. Pages before the first or past the last are empty.
    #[must_use]
    pub fn page(&self, page: usize, page_size: usize) -> Page<'_> {
        let total_items = self.acts.len();
        let page_size = page_size.max(1);

        let acts = page
            .checked_sub(1)
            .and_then(|p| p.checked_mul(page_size))
            .filter(|start| *start < total_items)
            .map_or(&[][..], |start| {
                let end = (start + page_size).min(total_items);
                &self.acts[start..end]
            });

        Page {
            acts,
            current_page: page,
            total_pages: total_items.div_ceil(page_size),
            total_items,
        }
    }
}

impl CatalogStore for Catalog {
    fn all(&self) -> &[Act] {
        &self.acts
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Act;
    type IntoIter = std::slice::Iter<'a, Act>;

    fn into_iter(self) -> Self::IntoIter {
        self.acts.iter()
    }
}

impl From<Vec<Act>> for Catalog {
    fn from(acts: Vec<Act>) -> Self {
        Self::new(acts)
    }
}

/// One page of the catalog, for browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page<'a> {
    pub acts: &'a [Act],
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}
