//! Error types for record queries and extractor configuration.
//!
//! Extraction itself never fails: missing or malformed subfield data simply
//! leaves the corresponding value absent. Parsing a textual query path such as
//! `773[0]$t` and validating configured tags report problems through
//! [`MarcError`].

use thiserror::Error;

/// Error type for the fallible operations of this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarcError {
    /// A query path could not be parsed.
    #[error("Invalid query path '{path}': {reason}")]
    InvalidQueryPath {
        /// The path as given.
        path: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A field tag was not three ASCII alphanumeric characters.
    #[error("Invalid tag: {0}")]
    InvalidTag(String),
}

impl MarcError {
    pub(crate) fn query_path(path: &str, reason: impl Into<String>) -> Self {
        MarcError::InvalidQueryPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for [`std::result::Result`] with [`MarcError`].
pub type Result<T> = std::result::Result<T, MarcError>;
