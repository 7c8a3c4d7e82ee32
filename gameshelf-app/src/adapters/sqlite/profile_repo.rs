//! `ProfileRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use gameshelf_core::error::{CoreError, CoreResult};
use gameshelf_core::traits::ProfileRepository;
use gameshelf_core::types::{Profile, ProfileUpdate};

use super::entity::{profile, user};
use super::{parse_datetime, SqliteStore};

impl SqliteStore {
    /// Load the profile row for an identity along with the joined username.
    async fn profile_row(&self, identity_id: i64) -> CoreResult<Option<(profile::Model, String)>> {
        let Some(row) = profile::Entity::find()
            .filter(profile::Column::UserId.eq(identity_id))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query profile: {e}")))?
        else {
            return Ok(None);
        };

        let owner = user::Entity::find_by_id(identity_id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query user: {e}")))?
            .ok_or_else(|| {
                // The cascade delete removes profiles with their owner, so a
                // profile without its user means the store is inconsistent.
                CoreError::StorageError(format!("Profile {} has no owning user", row.id))
            })?;

        Ok(Some((row, owner.username)))
    }
}

fn into_profile(row: profile::Model, username: String) -> CoreResult<Profile> {
    let created_at = parse_datetime(&row.created_at, "created_at")?;
    let updated_at = parse_datetime(&row.updated_at, "updated_at")?;
    Ok(Profile {
        id: row.id,
        identity_id: row.user_id,
        username,
        display_name: row.display_name,
        bio: row.bio,
        avatar_url: row.avatar_url,
        theme_color: row.theme_color,
        banner_url: row.banner_url,
        created_at,
        updated_at,
    })
}

#[async_trait]
impl ProfileRepository for SqliteStore {
    async fn find_by_identity(&self, identity_id: i64) -> CoreResult<Option<Profile>> {
        self.profile_row(identity_id)
            .await?
            .map(|(row, username)| into_profile(row, username))
            .transpose()
    }

    async fn replace(
        &self,
        identity_id: i64,
        update: ProfileUpdate,
    ) -> CoreResult<Option<Profile>> {
        let Some((row, username)) = self.profile_row(identity_id).await? else {
            return Ok(None);
        };

        // REPLACE semantics: all five fields are written literally, absent
        // ones clearing whatever was stored.
        let mut active: profile::ActiveModel = row.into();
        active.display_name = Set(update.display_name);
        active.bio = Set(update.bio);
        active.avatar_url = Set(update.avatar_url);
        active.theme_color = Set(update.theme_color);
        active.banner_url = Set(update.banner_url);
        active.updated_at = Set(Utc::now().to_rfc3339());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to update profile: {e}")))?;

        into_profile(updated, username).map(Some)
    }
}
