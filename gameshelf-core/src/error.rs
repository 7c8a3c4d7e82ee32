//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use gameshelf_catalog::CatalogError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Missing or malformed caller input
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Uniqueness violation (username already taken)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Login failure. One generic message for unknown-user and wrong-secret
    /// alike, so the error text never confirms a username exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing or invalid session assertion
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Identity not found
    #[error("Identity not found: {0}")]
    IdentityNotFound(i64),

    /// Profile not found
    #[error("Profile not found for identity: {0}")]
    ProfileNotFound(i64),

    /// Library entry not found, or not owned by the calling identity.
    /// The two cases are deliberately indistinguishable.
    #[error("Entry not found: {0}")]
    EntryNotFound(i64),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Catalog error (converted from library)
    #[error("{0}")]
    Catalog(#[from] CatalogError),
}

impl CoreError {
    /// Whether this is expected behavior (user input, resource does not exist,
    /// etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_)
            | Self::Conflict(_)
            | Self::InvalidCredentials
            | Self::Unauthorized(_)
            | Self::IdentityNotFound(_)
            | Self::ProfileNotFound(_)
            | Self::EntryNotFound(_) => true,
            Self::Catalog(e) => e.is_expected(),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_message_is_generic() {
        // Unknown-user and wrong-secret share this one value, so the message
        // must not name a username or a cause.
        assert_eq!(CoreError::InvalidCredentials.to_string(), "Invalid credentials");
    }

    #[test]
    fn expected_classification() {
        assert!(CoreError::Conflict("alice".into()).is_expected());
        assert!(CoreError::EntryNotFound(7).is_expected());
        assert!(CoreError::Unauthorized("expired".into()).is_expected());
        assert!(!CoreError::StorageError("disk full".into()).is_expected());
        assert!(CoreError::Catalog(CatalogError::AppNotFound(620)).is_expected());
        assert!(!CoreError::Catalog(CatalogError::Timeout("10s".into())).is_expected());
    }
}
