//! Catalog error type

use serde::Serialize;
use thiserror::Error;

/// Errors produced by catalog lookups.
///
/// Network failures and timeouts are transient; the caller decides whether
/// to retry. `AppNotFound` and `InvalidQuery` are terminal.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CatalogError {
    /// Network-level failure (DNS, connection refused, TLS, ...).
    #[error("Catalog network error: {0}")]
    NetworkError(String),

    /// The request exceeded the client timeout.
    #[error("Catalog request timed out: {0}")]
    Timeout(String),

    /// The response body could not be parsed.
    #[error("Catalog response parse error: {0}")]
    ParseError(String),

    /// The catalog has no entry for the requested app id.
    #[error("Catalog app not found: {0}")]
    AppNotFound(i64),

    /// The search query was empty or otherwise unusable.
    #[error("Invalid catalog query: {0}")]
    InvalidQuery(String),
}

impl CatalogError {
    /// Whether the error is expected behavior (bad input, absent entry).
    ///
    /// Expected errors should be logged at `warn`, the rest at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::AppNotFound(_) | Self::InvalidQuery(_))
    }
}

/// Catalog Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;
