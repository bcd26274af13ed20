//! Upstream plumbing for encore.
//!
//! Fetches the act catalog and the location index from the upstream JSON
//! API, and loads the tool's configuration.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod error;
pub mod location;

pub use client::ApiClient;
pub use config::Config;
pub use error::{FetchError, FetchResult};
pub use location::HttpLocationIndex;
