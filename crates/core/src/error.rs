//! Catalog error model.

use thiserror::Error;

/// Result type used at parsing boundaries (view keys, export specs, config).
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Boundary-level error.
///
/// The listing pipeline itself is total and never returns this; it is only
/// produced when turning caller-supplied strings into typed inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A view status key did not name a known status.
    #[error("unknown status key: {0}")]
    UnknownStatus(String),

    /// An identifier was invalid (e.g. empty after trimming).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An export column specification could not be parsed.
    #[error("invalid export column: {0}")]
    InvalidColumn(String),
}

impl CatalogError {
    pub fn unknown_status(key: impl Into<String>) -> Self {
        Self::UnknownStatus(key.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_column(msg: impl Into<String>) -> Self {
        Self::InvalidColumn(msg.into())
    }
}
