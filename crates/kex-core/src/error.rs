//! Error types for kex-core.
//!
//! Empty keywords and searches without hits are ordinary
//! [`SearchOutcome`](crate::SearchOutcome) values, not errors. What remains is
//! a keyword that does not compile and a dictionary that cannot be loaded.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// A fallback keyword is not a valid regular expression.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A dictionary alias is not a valid regular expression.
    #[error("dictionary node at {path} has invalid alias {pattern:?}: {source}")]
    InvalidAlias {
        path: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A dictionary node has no aliases.
    #[error("dictionary node at {path} has no names")]
    EmptyNames { path: String },

    /// The dictionary file could not be read.
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary is not valid JSON or does not have the node shape.
    #[error("failed to parse dictionary: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        SearchError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
