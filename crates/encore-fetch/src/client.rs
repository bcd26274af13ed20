//! Upstream API client.
//!
//! The upstream serves two JSON documents: `/artists`, the ordered act
//! catalog, and `/locations`, the per-act concert locations wrapped in an
//! `{"index": [...]}` envelope. Each act also links to its own locations
//! and concert dates documents, which are fetched by absolute URL.

use reqwest::Client;
use serde::de::DeserializeOwned;

use encore_core::model::{Act, ConcertDates, LocationRecord, LocationsPayload};
use encore_core::Catalog;

use crate::config::Config;
use crate::error::{FetchError, FetchResult};

const USER_AGENT: &str = "encore/0.1.0 (https://github.com/oxur/encore)";

/// Client for the upstream artists/locations API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &Config) -> FetchResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client for an explicit base URL with default settings.
    pub fn with_base_url(base_url: impl Into<String>) -> FetchResult<Self> {
        let config = Config {
            api_base_url: base_url.into(),
            ..Config::default()
        };
        Self::new(&config)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch and decode the act catalog.
    pub async fn fetch_artists(&self) -> FetchResult<Catalog> {
        let acts = self.get_json("artists").await?;
        Ok(Catalog::new(acts))
    }

    /// Fetch and decode the location index.
    pub async fn fetch_locations(&self) -> FetchResult<Vec<LocationRecord>> {
        let payload: LocationsPayload = self.get_json("locations").await?;
        Ok(payload.index)
    }

    /// Fetch the locations document linked from one act.
    pub async fn fetch_act_locations(&self, act: &Act) -> FetchResult<LocationRecord> {
        let url = link(act, &act.locations, "locations")?;
        self.get_url(url.to_string()).await
    }

    /// Fetch the concert dates document linked from one act.
    pub async fn fetch_concert_dates(&self, act: &Act) -> FetchResult<ConcertDates> {
        let url = link(act, &act.concert_dates, "concertDates")?;
        self.get_url(url.to_string()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        self.get_url(format!("{}/{}", self.base_url, path)).await
    }

    async fn get_url<T: DeserializeOwned>(&self, url: String) -> FetchResult<T> {
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Body {
            url: url.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

fn link<'a>(act: &Act, url: &'a str, name: &'static str) -> FetchResult<&'a str> {
    if url.trim().is_empty() {
        return Err(FetchError::MissingLink {
            act: act.name.clone(),
            link: name,
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:8080/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/api");
    }

    #[test]
    fn test_missing_link() {
        let act = Act::new(1, "Queen", 1970);
        let err = link(&act, &act.concert_dates, "concertDates").unwrap_err();
        assert!(matches!(err, FetchError::MissingLink { link: "concertDates", .. }));
    }
}
