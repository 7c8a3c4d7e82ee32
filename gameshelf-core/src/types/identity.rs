//! Identity (user account) types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account as the storage layer sees it.
///
/// Carries the secret hash, so this type never crosses the service boundary;
/// read paths expose [`PublicIdentity`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Numeric id, assigned monotonically at creation and never reused.
    pub id: i64,
    /// Unique, case-sensitive username. Immutable after signup.
    pub username: String,
    /// PHC-format secret hash. Never serialized, never logged.
    pub secret_hash: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// The readable projection of this identity.
    #[must_use]
    pub fn to_public(&self) -> PublicIdentity {
        PublicIdentity {
            id: self.id,
            username: self.username.clone(),
            created_at: self.created_at,
        }
    }
}

/// The only identity shape read operations return. No secret material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicIdentity {
    /// Numeric id.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Creation time.
    #[serde(rename = "createdAt")]
    #[serde(with = "crate::utils::datetime")]
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an identity. The secret is already hashed by the
/// time it reaches the storage layer.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    /// Requested username.
    pub username: String,
    /// PHC-format secret hash.
    pub secret_hash: String,
}

/// A signed session assertion issued at register/login time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionToken {
    /// Opaque signed token string.
    pub token: String,
    /// Expiry time of the assertion.
    #[serde(rename = "expiresAt")]
    #[serde(with = "crate::utils::datetime")]
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful register or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// The authenticated identity.
    pub identity: PublicIdentity,
    /// Session assertion for subsequent calls.
    pub session: SessionToken,
}
