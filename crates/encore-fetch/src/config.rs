use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use encore_core::catalog::DEFAULT_PAGE_SIZE;

/// Base URL of the public groupie-trackers API.
pub const DEFAULT_API_BASE_URL: &str = "https://groupietrackers.herokuapp.com/api";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for encore.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (ENCORE_* prefix)
/// 3. Config file (~/.config/encore/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the upstream API serving `/artists` and `/locations`.
    ///
    /// Can be set via:
    /// - CLI: --api-url https://...
    /// - ENV: ENCORE_API_BASE_URL
    /// - Config: api_base_url = "https://..."
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Timeout for a single upstream request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Acts per page when browsing the catalog.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "encore=debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/encore/config.toml
    /// Reads environment variables with ENCORE_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific file plus the environment.
    ///
    /// A missing file is not an error; defaults fill the gaps.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str).context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("encore");
        builder.add_env(env_opts).context("Failed to load environment variables")?;

        builder.build().context("Failed to build configuration")
    }

    /// Load configuration with a custom API base URL.
    ///
    /// This is used when the --api-url CLI flag is provided.
    pub fn load_with_api_base_url(api_base_url: String) -> Result<Self> {
        let mut config = Self::load()?;
        config.api_base_url = api_base_url;
        Ok(config)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/encore/config.toml
/// - macOS: ~/Library/Application Support/encore/config.toml
/// - Windows: %APPDATA%\encore\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("encore")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Encore Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (ENCORE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Upstream API serving /artists and /locations
#
# Can also be set via:
# - CLI: encore --api-url https://example.test/api search queen
# - Environment: ENCORE_API_BASE_URL=https://example.test/api
api_base_url = "https://groupietrackers.herokuapp.com/api"

# Timeout for each upstream request, in seconds
request_timeout_secs = 30

# Acts per page for `encore bands`
page_size = 8

# Log filter used when RUST_LOG is unset
log_level = "info"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    ensure_config_file_at(&config_file_path())
}

/// Like [`ensure_config_file`], for an explicit location.
pub fn ensure_config_file_at(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
