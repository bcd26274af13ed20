//! Core domain model for encore.
//!
//! This crate defines the musical act catalog (`Act`, `ActId`), the
//! per-act location records served by the upstream location index, and the
//! read-only [`Catalog`] snapshot every search runs against.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::{Catalog, CatalogStore, Page, DEFAULT_PAGE_SIZE};
pub use error::{Error, Result};
pub use model::{Act, ActId, ConcertDates, LocationRecord, LocationsPayload};
