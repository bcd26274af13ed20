//! Search entry point.
//!
//! One call to [`SearchService::search`] normalises the query, fetches the
//! location index once, and walks the catalog a single time. The set of
//! positions with a matching location is the same for every act, so it is
//! computed before the walk and offered to each act's pass. Any failure
//! aborts the whole search; nothing is retried and no partial result is
//! returned.

use std::fmt;
use std::sync::Arc;

use encore_core::catalog::CatalogStore;
use encore_core::model::ActId;

use crate::aggregate::{ResultAggregator, SearchResults};
use crate::error::{Result, SearchError};
use crate::location::{LocationIndex, LocationSnapshot};
use crate::matcher::FieldMatcher;
use crate::query::SearchTerm;

/// Method a search request arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
    Other(String),
}

impl From<&str> for RequestMethod {
    fn from(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
            Self::Put => f.write_str("PUT"),
            Self::Delete => f.write_str("DELETE"),
            Self::Other(method) => f.write_str(method),
        }
    }
}

/// A search as submitted by the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub method: RequestMethod,
    pub query: String,
}

impl SearchRequest {
    #[must_use]
    pub fn new(method: impl Into<RequestMethod>, query: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            query: query.into(),
        }
    }

    #[must_use]
    pub fn post(query: impl Into<String>) -> Self {
        Self::new(RequestMethod::Post, query)
    }
}

/// Runs free-text searches against a shared, read-only catalog.
///
/// The service holds no mutable state, so one instance can serve any
/// number of concurrent searches.
#[derive(Clone)]
pub struct SearchService {
    catalog: Arc<dyn CatalogStore>,
    locations: Arc<dyn LocationIndex>,
}

impl fmt::Debug for SearchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchService")
            .field("catalog_len", &self.catalog.all().len())
            .finish_non_exhaustive()
    }
}

impl SearchService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogStore>, locations: Arc<dyn LocationIndex>) -> Self {
        Self { catalog, locations }
    }

    /// Handle a submitted search, rejecting anything but `POST`.
    pub async fn handle(&self, request: &SearchRequest) -> Result<SearchResults> {
        if request.method != RequestMethod::Post {
            return Err(SearchError::MethodNotAllowed(request.method.to_string()));
        }
        self.search(&request.query).await
    }

    /// Search the catalog for `raw_query`.
    ///
    /// # Errors
    /// - [`SearchError::InvalidQuery`] if the query has no search term.
    /// - [`SearchError::UpstreamUnavailable`] if the location index cannot
    ///   be fetched. No matching is attempted in that case.
    pub async fn search(&self, raw_query: &str) -> Result<SearchResults> {
        let term = SearchTerm::parse(raw_query)?;

        let records = self.locations.fetch().await.inspect_err(|e| {
            log::warn!(
                "Location index unavailable, aborting search for {:?}: {}",
                term.as_str(),
                e
            );
        })?;
        let snapshot = LocationSnapshot::new(records);

        let acts = self.catalog.all();
        let orphaned = snapshot.orphaned(acts.len());
        if orphaned > 0 {
            log::debug!("Ignoring {} location records with no matching act", orphaned);
        }

        let matcher = FieldMatcher::new(&term);
        let location_positions = matcher.matching_positions(&snapshot, acts.len());
        let mut aggregator = ResultAggregator::new();

        for (index, act) in acts.iter().enumerate() {
            let id = ActId::from_index(index);
            for hit in matcher.evaluate(id, act, &location_positions) {
                let Some(target) = hit.id.index().and_then(|i| acts.get(i)) else {
                    continue;
                };
                aggregator.record(hit.predicate, target);
            }
        }

        let results = aggregator.finish();
        log::info!(
            "Search for {:?}: {} results over {} acts",
            term.as_str(),
            results.len(),
            acts.len()
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::StaticLocationIndex;
    use encore_core::catalog::Catalog;
    use encore_core::model::{Act, LocationRecord};

    fn service(acts: Vec<Act>, records: Vec<LocationRecord>) -> SearchService {
        SearchService::new(
            Arc::new(Catalog::new(acts)),
            Arc::new(StaticLocationIndex::new(records)),
        )
    }

    #[test]
    fn test_request_method_parsing() {
        assert_eq!(RequestMethod::from("post"), RequestMethod::Post);
        assert_eq!(RequestMethod::from("GET"), RequestMethod::Get);
        assert_eq!(
            RequestMethod::from("patch"),
            RequestMethod::Other("PATCH".to_string())
        );
    }

    #[tokio::test]
    async fn test_handle_rejects_get() {
        let svc = service(vec![Act::new(1, "Queen", 1970)], vec![]);
        let err = svc
            .handle(&SearchRequest::new("GET", "Queen"))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::MethodNotAllowed(ref m) if m == "GET"));
    }

    #[tokio::test]
    async fn test_handle_accepts_post() {
        let svc = service(vec![Act::new(1, "Queen", 1970)], vec![]);
        let results = svc.handle(&SearchRequest::post("queen")).await.unwrap();
        assert_eq!(results.names(), vec!["Queen"]);
    }

    #[tokio::test]
    async fn test_search_by_year_in_catalog_order() {
        let svc = service(
            vec![Act::new(1, "Queen", 1970), Act::new(2, "ABBA", 1970)],
            vec![],
        );
        let results = svc.search("1970").await.unwrap();
        assert_eq!(results.names(), vec!["Queen", "ABBA"]);
    }

    #[tokio::test]
    async fn test_search_empty_catalog() {
        let svc = service(vec![], vec![LocationRecord::new(1, ["paris-france"])]);
        let results = svc.search("paris").await.unwrap();
        assert!(results.is_empty());
    }
}
