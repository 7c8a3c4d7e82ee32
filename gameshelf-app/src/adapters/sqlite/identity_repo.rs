//! `IdentityRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, SqlErr,
    TransactionTrait,
};

use gameshelf_core::error::{CoreError, CoreResult};
use gameshelf_core::traits::IdentityRepository;
use gameshelf_core::types::{Identity, NewIdentity, PublicIdentity, DEFAULT_THEME_COLOR};

use super::entity::{library_entry, profile, user};
use super::{parse_datetime, SqliteStore};

impl user::Model {
    /// Convert a `SeaORM` row model into a domain `Identity`.
    fn into_identity(self) -> CoreResult<Identity> {
        let created_at = parse_datetime(&self.created_at, "created_at")?;
        Ok(Identity {
            id: self.id,
            username: self.username,
            secret_hash: self.secret_hash,
            created_at,
        })
    }
}

#[async_trait]
impl IdentityRepository for SqliteStore {
    async fn create_with_profile(&self, new: NewIdentity) -> CoreResult<Identity> {
        let now = Utc::now().to_rfc3339();
        let username = new.username.clone();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to begin transaction: {e}")))?;

        let user_model = user::ActiveModel {
            username: Set(new.username),
            secret_hash: Set(new.secret_hash),
            created_at: Set(now.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            // The unique constraint closes the race the advisory service-level
            // check leaves open.
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                CoreError::Conflict(username.clone())
            } else {
                CoreError::StorageError(format!("Failed to insert user: {e}"))
            }
        })?;

        profile::ActiveModel {
            user_id: Set(user_model.id),
            display_name: Set(Some(user_model.username.clone())),
            theme_color: Set(Some(DEFAULT_THEME_COLOR.to_string())),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| CoreError::StorageError(format!("Failed to insert profile: {e}")))?;

        // Dropping the transaction on any earlier error rolls the user row
        // back, so no identity is ever visible without its profile.
        txn.commit()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to commit signup: {e}")))?;

        user_model.into_identity()
    }

    async fn find_by_username(&self, username: &str) -> CoreResult<Option<Identity>> {
        let row = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query user: {e}")))?;

        row.map(user::Model::into_identity).transpose()
    }

    async fn find_public(&self, id: i64) -> CoreResult<Option<PublicIdentity>> {
        let row = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query user: {e}")))?;

        row.map(|m| m.into_identity().map(|i| i.to_public()))
            .transpose()
    }

    async fn delete(&self, id: i64) -> CoreResult<()> {
        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query user: {e}")))?;
        if existing.is_none() {
            return Err(CoreError::IdentityNotFound(id));
        }

        // One explicit cascade routine shared by contract with the memory
        // backend; the schema's FK cascades back this up.
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to begin transaction: {e}")))?;

        library_entry::Entity::delete_many()
            .filter(library_entry::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete entries: {e}")))?;

        profile::Entity::delete_many()
            .filter(profile::Column::UserId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete profile: {e}")))?;

        user::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete user: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to commit delete: {e}")))?;

        Ok(())
    }
}
