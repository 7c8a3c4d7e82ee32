//! Profile read and full-replace operations.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{Profile, ProfileUpdate};

/// Profile service.
pub struct ProfileService {
    ctx: Arc<ServiceContext>,
}

impl ProfileService {
    /// Create a profile service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Fetch the calling identity's profile, username joined in.
    pub async fn get(&self, identity_id: i64) -> CoreResult<Profile> {
        self.ctx
            .profile_repository()
            .find_by_identity(identity_id)
            .await?
            .ok_or(CoreError::ProfileNotFound(identity_id))
    }

    /// Replace all five display fields.
    ///
    /// REPLACE semantics: omitted fields overwrite stored values with
    /// absence. Creation invariants guarantee a profile exists, but a
    /// missing row still surfaces as `ProfileNotFound` rather than panicking.
    pub async fn replace(&self, identity_id: i64, update: ProfileUpdate) -> CoreResult<Profile> {
        self.ctx
            .profile_repository()
            .replace(identity_id, update)
            .await?
            .ok_or(CoreError::ProfileNotFound(identity_id))
    }
}
