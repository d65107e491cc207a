use std::path::PathBuf;

use thiserror::Error;

/// Main error type for rindex operations
#[derive(Error, Debug)]
pub enum RindexError {
    #[error("Failed to read document {path:?}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed index at line {line}: {reason}")]
    MalformedIndex { line: usize, reason: String },

    #[error("Cannot encode index entry: {0}")]
    UnencodableEntry(String),

    #[error("Query parse error: {0}")]
    QueryParseError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for rindex operations
pub type Result<T> = std::result::Result<T, RindexError>;

impl RindexError {
    /// Check if this error only invalidates the current query, leaving the session usable
    pub fn is_query_local(&self) -> bool {
        matches!(self, RindexError::QueryParseError(_))
    }
}
