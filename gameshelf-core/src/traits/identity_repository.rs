//! Identity persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Identity, NewIdentity, PublicIdentity};

/// Identity warehouse Trait
///
/// Backend implementations:
/// - Durable: `SqliteStore` (`SeaORM`, auto-increment ids, FK cascades)
/// - Ephemeral: `MemoryStore` (in-process collections, monotonic counters)
///
/// Both backends must expose identical observable behavior. In particular,
/// ids are monotonic for the life of the store and are never reused, even
/// after deletes.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Create an identity and its profile atomically.
    ///
    /// The profile is seeded with the username as display name and the
    /// default theme color. A failure after the identity insert must not
    /// leave an orphaned identity visible.
    ///
    /// Returns `CoreError::Conflict` if the username is already taken
    /// (case-sensitive exact match, enforced by the storage layer).
    async fn create_with_profile(&self, new: NewIdentity) -> CoreResult<Identity>;

    /// Look up an identity by exact username, secret hash included.
    ///
    /// For credential verification only; the hash must not travel further
    /// than the auth service.
    async fn find_by_username(&self, username: &str) -> CoreResult<Option<Identity>>;

    /// Public projection of an identity. Never includes the secret hash.
    async fn find_public(&self, id: i64) -> CoreResult<Option<PublicIdentity>>;

    /// Delete an identity, cascading to its profile and all its library
    /// entries. The single cascade entry point for both backends.
    ///
    /// Returns `CoreError::IdentityNotFound` if the identity does not exist.
    async fn delete(&self, id: i64) -> CoreResult<()>;
}
