//! Query normalisation.
//!
//! The search box autocompletes suggestions of the form `"Queen - band"` or
//! `"1970 - creation date"`; only the part before the first delimiter is
//! searched for.

use std::fmt;

use crate::error::{Result, SearchError};

/// Separator between the searched text and an autocomplete annotation.
pub const QUERY_DELIMITER: &str = " - ";

/// The effective term extracted from a raw query.
///
/// The term is kept verbatim: no trimming or case folding happens here.
/// Each predicate applies its own normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Take the first `" - "`-delimited segment of `raw` as the search term.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidQuery`] when that segment is empty.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.split(QUERY_DELIMITER).next() {
            Some(segment) if !segment.is_empty() => Ok(Self(segment.to_string())),
            _ => Err(SearchError::InvalidQuery(format!(
                "no search term before {QUERY_DELIMITER:?} in {raw:?}"
            ))),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The term as a formation year, if it parses as an integer.
    #[must_use]
    pub fn as_year(&self) -> Option<i32> {
        self.0.parse().ok()
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchTerm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_query() {
        let term = SearchTerm::parse("Queen").unwrap();
        assert_eq!(term.as_str(), "Queen");
    }

    #[test]
    fn test_suggestion_suffix_is_dropped() {
        let term = SearchTerm::parse("Queen - 1970").unwrap();
        assert_eq!(term.as_str(), "Queen");

        let term = SearchTerm::parse("Freddie Mercury - member - Queen").unwrap();
        assert_eq!(term.as_str(), "Freddie Mercury");
    }

    #[test]
    fn test_term_is_not_trimmed() {
        let term = SearchTerm::parse("  queen  - band").unwrap();
        assert_eq!(term.as_str(), "  queen ");
    }

    #[test]
    fn test_hyphen_without_spaces_is_kept() {
        let term = SearchTerm::parse("AC-DC").unwrap();
        assert_eq!(term.as_str(), "AC-DC");
    }

    #[test]
    fn test_empty_query_is_invalid() {
        let err = SearchTerm::parse("").unwrap_err();
        assert!(matches!(err, SearchError::InvalidQuery(_)));
    }

    #[test]
    fn test_nothing_before_delimiter_is_invalid() {
        assert!(matches!(
            SearchTerm::parse(" - band"),
            Err(SearchError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_as_year() {
        assert_eq!(SearchTerm::parse("1970").unwrap().as_year(), Some(1970));
        assert_eq!(SearchTerm::parse("1970 - creation date").unwrap().as_year(), Some(1970));
        assert_eq!(SearchTerm::parse("Queen").unwrap().as_year(), None);
        assert_eq!(SearchTerm::parse(" 1970").unwrap().as_year(), None);
    }
}
