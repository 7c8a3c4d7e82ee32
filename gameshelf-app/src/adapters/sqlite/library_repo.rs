//! `LibraryRepository` implementation for `SqliteStore`.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder,
};

use gameshelf_core::error::{CoreError, CoreResult};
use gameshelf_core::traits::LibraryRepository;
use gameshelf_core::types::{EntryDraft, LibraryEntry};

use super::entity::library_entry;
use super::{decode_genres, encode_genres, parse_datetime, SqliteStore};

impl library_entry::Model {
    fn into_entry(self) -> CoreResult<LibraryEntry> {
        let created_at = parse_datetime(&self.created_at, "created_at")?;
        let updated_at = parse_datetime(&self.updated_at, "updated_at")?;
        Ok(LibraryEntry {
            id: self.id,
            identity_id: self.user_id,
            catalog_id: self.catalog_id,
            title: self.title,
            platform: self.platform,
            status: self.status,
            progress: self.progress,
            rating: self.rating,
            cover_url: self.cover_url,
            genres: decode_genres(&self.genres),
            playtime: self.playtime,
            started_date: self.started_date,
            completed_date: self.completed_date,
            notes: self.notes,
            created_at,
            updated_at,
        })
    }
}

impl SqliteStore {
    /// Fetch a row matching both the entry id and the owning identity.
    async fn owned_row(
        &self,
        entry_id: i64,
        identity_id: i64,
    ) -> CoreResult<Option<library_entry::Model>> {
        library_entry::Entity::find_by_id(entry_id)
            .filter(library_entry::Column::UserId.eq(identity_id))
            .one(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to query entry: {e}")))
    }
}

#[async_trait]
impl LibraryRepository for SqliteStore {
    async fn list_for(&self, identity_id: i64) -> CoreResult<Vec<LibraryEntry>> {
        let rows = library_entry::Entity::find()
            .filter(library_entry::Column::UserId.eq(identity_id))
            .order_by(library_entry::Column::CreatedAt, Order::Desc)
            .order_by(library_entry::Column::Id, Order::Desc)
            .all(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to list entries: {e}")))?;

        rows.into_iter()
            .map(library_entry::Model::into_entry)
            .collect()
    }

    async fn create(&self, identity_id: i64, draft: EntryDraft) -> CoreResult<LibraryEntry> {
        let now = Utc::now().to_rfc3339();
        let genres = encode_genres(&draft.genres_or_default())?;

        let model = library_entry::ActiveModel {
            user_id: Set(identity_id),
            catalog_id: Set(draft.catalog_id),
            title: Set(draft.title.clone()),
            platform: Set(draft.platform.clone()),
            status: Set(draft.status_or_default()),
            progress: Set(draft.progress_or_default()),
            rating: Set(draft.rating),
            cover_url: Set(draft.cover_url.clone()),
            genres: Set(genres),
            playtime: Set(draft.playtime_or_default()),
            started_date: Set(draft.started_date.clone()),
            completed_date: Set(draft.completed_date.clone()),
            notes: Set(draft.notes.clone()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| CoreError::StorageError(format!("Failed to insert entry: {e}")))?;

        model.into_entry()
    }

    async fn find_owned(
        &self,
        entry_id: i64,
        identity_id: i64,
    ) -> CoreResult<Option<LibraryEntry>> {
        self.owned_row(entry_id, identity_id)
            .await?
            .map(library_entry::Model::into_entry)
            .transpose()
    }

    async fn update_owned(
        &self,
        entry_id: i64,
        identity_id: i64,
        draft: EntryDraft,
    ) -> CoreResult<Option<LibraryEntry>> {
        let Some(row) = self.owned_row(entry_id, identity_id).await? else {
            return Ok(None);
        };

        let genres = encode_genres(&draft.genres_or_default())?;

        // Full replace of every mutable field. Owner, id, created_at, and
        // the catalog link never change; the link is set at creation only.
        let mut active: library_entry::ActiveModel = row.into();
        active.title = Set(draft.title.clone());
        active.platform = Set(draft.platform.clone());
        active.status = Set(draft.status_or_default());
        active.progress = Set(draft.progress_or_default());
        active.rating = Set(draft.rating);
        active.cover_url = Set(draft.cover_url.clone());
        active.genres = Set(genres);
        active.playtime = Set(draft.playtime_or_default());
        active.started_date = Set(draft.started_date.clone());
        active.completed_date = Set(draft.completed_date.clone());
        active.notes = Set(draft.notes.clone());
        active.updated_at = Set(Utc::now().to_rfc3339());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to update entry: {e}")))?;

        updated.into_entry().map(Some)
    }

    async fn delete_owned(&self, entry_id: i64, identity_id: i64) -> CoreResult<bool> {
        let result = library_entry::Entity::delete_many()
            .filter(library_entry::Column::Id.eq(entry_id))
            .filter(library_entry::Column::UserId.eq(identity_id))
            .exec(&self.db)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to delete entry: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
