//! Error model for catalog and configuration input.

use thiserror::Error;

/// Result type used at the fallible edges (parsing catalog/config input).
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Filtering and merging never fail; only turning raw content into typed
/// values can.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog or config payload was not valid JSON for the expected shape.
    #[error("failed to parse catalog input: {0}")]
    Parse(String),

    /// A store key did not have the `ghes-<version>` form.
    #[error("invalid version key: {0}")]
    InvalidVersionKey(String),

    /// A plan or version tag was empty.
    #[error("invalid tag: {0}")]
    InvalidTag(String),
}

impl CatalogError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn invalid_version_key(msg: impl Into<String>) -> Self {
        Self::InvalidVersionKey(msg.into())
    }

    pub fn invalid_tag(msg: impl Into<String>) -> Self {
        Self::InvalidTag(msg.into())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}
