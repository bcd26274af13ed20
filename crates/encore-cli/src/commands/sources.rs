use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use encore_core::model::LocationsPayload;
use encore_core::Catalog;
use encore_fetch::{ApiClient, Config, HttpLocationIndex};
use encore_search::{LocationIndex, StaticLocationIndex};

/// Where the catalog and location index come from.
///
/// Each source defaults to the upstream API; a file overrides it.
#[derive(Debug, Default)]
pub struct Sources {
    pub catalog_file: Option<PathBuf>,
    pub locations_file: Option<PathBuf>,
}

impl Sources {
    /// Materialise the catalog once, before any search runs.
    pub async fn load_catalog(&self, config: &Config) -> Result<Catalog> {
        let catalog = match &self.catalog_file {
            Some(path) => {
                let bytes = read(path)?;
                Catalog::from_json(&bytes)
                    .with_context(|| format!("Failed to parse catalog file {}", path.display()))?
            }
            None => ApiClient::new(config)?
                .fetch_artists()
                .await
                .context("Failed to fetch the act catalog")?,
        };

        log::info!("Catalog loaded: {} acts", catalog.len());
        Ok(catalog)
    }

    pub fn location_index(&self, config: &Config) -> Result<Arc<dyn LocationIndex>> {
        match &self.locations_file {
            Some(path) => {
                let bytes = read(path)?;
                let payload: LocationsPayload = serde_json::from_slice(&bytes)
                    .with_context(|| format!("Failed to parse locations file {}", path.display()))?;
                Ok(Arc::new(StaticLocationIndex::new(payload.index)))
            }
            None => Ok(Arc::new(HttpLocationIndex::new(ApiClient::new(config)?))),
        }
    }
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}
