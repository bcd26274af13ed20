//! Free-text search over the encore act catalog.
//!
//! A raw query is reduced to a single search term, every act in the
//! catalog is checked against five independent predicates (formation year,
//! name, debut album, members, performance locations), and the matches are
//! collected in catalog order. Year, name and debut-album matches are
//! appended unconditionally; member and location matches are skipped when
//! an act with the same name is already in the result.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod aggregate;
pub mod error;
pub mod location;
pub mod matcher;
pub mod query;
pub mod service;

pub use aggregate::{ResultAggregator, SearchResults};
pub use error::{Result, SearchError};
pub use location::{LocationIndex, LocationSnapshot, StaticLocationIndex};
pub use matcher::{DedupPolicy, FieldMatcher, Hit, Predicate};
pub use query::SearchTerm;
pub use service::{RequestMethod, SearchRequest, SearchService};
