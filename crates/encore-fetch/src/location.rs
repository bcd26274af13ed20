use async_trait::async_trait;

use encore_core::model::LocationRecord;
use encore_search::{LocationIndex, SearchError};

use crate::client::ApiClient;

/// [`LocationIndex`] that fetches `/locations` from the upstream API on
/// every call.
#[derive(Debug, Clone)]
pub struct HttpLocationIndex {
    client: ApiClient,
}

impl HttpLocationIndex {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LocationIndex for HttpLocationIndex {
    async fn fetch(&self) -> encore_search::Result<Vec<LocationRecord>> {
        self.client.fetch_locations().await.map_err(|e| {
            log::warn!("Failed to fetch location index: {}", e);
            SearchError::from(e)
        })
    }
}
