//! Profile persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{Profile, ProfileUpdate};

/// Profile warehouse Trait
///
/// Rows are created by `IdentityRepository::create_with_profile` and removed
/// by its cascade delete; this trait only reads and replaces.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch the profile of an identity, with the username joined in.
    async fn find_by_identity(&self, identity_id: i64) -> CoreResult<Option<Profile>>;

    /// Replace all five display fields and bump `updated_at`.
    ///
    /// Fields absent from the update overwrite stored values with absence
    /// (REPLACE semantics). Returns `Ok(None)` if the identity has no
    /// profile; creation invariants make that unreachable in practice, but
    /// callers must handle it.
    async fn replace(&self, identity_id: i64, update: ProfileUpdate)
        -> CoreResult<Option<Profile>>;
}
