//! The location index consumed by the search service.
//!
//! The index is owned upstream and fetched fresh for every search; nothing
//! is cached between requests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use encore_core::model::{ActId, LocationRecord};

use crate::error::Result;

/// Source of the per-act location records.
///
/// Implementations collapse every transport or decoding failure into
/// [`SearchError::UpstreamUnavailable`](crate::SearchError::UpstreamUnavailable).
#[async_trait]
pub trait LocationIndex: Send + Sync {
    async fn fetch(&self) -> Result<Vec<LocationRecord>>;
}

/// A location index backed by a fixed list of records.
///
/// Used for offline runs and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticLocationIndex {
    records: Vec<LocationRecord>,
}

impl StaticLocationIndex {
    #[must_use]
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl LocationIndex for StaticLocationIndex {
    async fn fetch(&self) -> Result<Vec<LocationRecord>> {
        Ok(self.records.clone())
    }
}

/// One fetched copy of the location index, keyed by catalog position.
///
/// Several records sharing an identifier are merged. Records whose
/// identifier names no act are kept; matching skips them.
#[derive(Debug, Clone, Default)]
pub struct LocationSnapshot {
    by_act: BTreeMap<ActId, Vec<String>>,
}

impl LocationSnapshot {
    #[must_use]
    pub fn new(records: Vec<LocationRecord>) -> Self {
        let mut by_act: BTreeMap<ActId, Vec<String>> = BTreeMap::new();
        for record in records {
            by_act.entry(record.id).or_default().extend(record.locations);
        }
        Self { by_act }
    }

    /// Every `(id, location)` pair, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (ActId, &str)> {
        self.by_act.iter().flat_map(|(id, locations)| {
            locations.iter().map(move |location| (*id, location.as_str()))
        })
    }

    /// Number of records whose identifier falls outside `1..=catalog_len`.
    #[must_use]
    pub fn orphaned(&self, catalog_len: usize) -> usize {
        self.by_act
            .keys()
            .filter(|id| id.index().map_or(true, |index| index >= catalog_len))
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_act.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_act.is_empty()
    }
}

impl From<Vec<LocationRecord>> for LocationSnapshot {
    fn from(records: Vec<LocationRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_orders_by_id() {
        let snapshot = LocationSnapshot::new(vec![
            LocationRecord::new(2, ["new_york-usa", "paris-france"]),
            LocationRecord::new(1, ["london-uk"]),
        ]);

        let pairs: Vec<(ActId, &str)> = snapshot.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (ActId::new(1), "london-uk"),
                (ActId::new(2), "new_york-usa"),
                (ActId::new(2), "paris-france"),
            ]
        );
    }

    #[test]
    fn test_duplicate_ids_are_merged() {
        let snapshot = LocationSnapshot::new(vec![
            LocationRecord::new(3, ["osaka-japan"]),
            LocationRecord::new(3, ["tokyo-japan"]),
        ]);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.iter().count(), 2);
    }

    #[test]
    fn test_orphaned_records() {
        let snapshot = LocationSnapshot::new(vec![
            LocationRecord::new(0, ["nowhere"]),
            LocationRecord::new(1, ["london-uk"]),
            LocationRecord::new(5, ["berlin-germany"]),
        ]);

        assert_eq!(snapshot.orphaned(2), 2);
        assert_eq!(snapshot.orphaned(5), 1);
    }

    #[tokio::test]
    async fn test_static_index_returns_records() {
        let index = StaticLocationIndex::new(vec![LocationRecord::new(1, ["london-uk"])]);
        let records = index.fetch().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].locations, vec!["london-uk"]);
    }
}
