//! Library entry CRUD service.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{EntryDraft, LibraryEntry};

/// Library entry service.
///
/// Title/platform presence is enforced here at the boundary; the stores
/// themselves accept whatever they are given.
pub struct LibraryService {
    ctx: Arc<ServiceContext>,
}

impl LibraryService {
    /// Create a library service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// All entries of the calling identity, newest first.
    pub async fn list(&self, identity_id: i64) -> CoreResult<Vec<LibraryEntry>> {
        self.ctx.library_repository().list_for(identity_id).await
    }

    /// Create an entry. `ValidationError` when title or platform is empty
    /// or blank.
    pub async fn create(&self, identity_id: i64, draft: EntryDraft) -> CoreResult<LibraryEntry> {
        Self::validate(&draft)?;
        let entry = self
            .ctx
            .library_repository()
            .create(identity_id, draft)
            .await?;
        log::info!(
            "Identity {identity_id} added entry {} ({})",
            entry.id,
            entry.title
        );
        Ok(entry)
    }

    /// Fetch one owned entry. Someone else's entry is `EntryNotFound`,
    /// never a permission error.
    pub async fn get(&self, entry_id: i64, identity_id: i64) -> CoreResult<LibraryEntry> {
        self.ctx
            .library_repository()
            .find_owned(entry_id, identity_id)
            .await?
            .ok_or(CoreError::EntryNotFound(entry_id))
    }

    /// Full-field replace of an owned entry.
    pub async fn update(
        &self,
        entry_id: i64,
        identity_id: i64,
        draft: EntryDraft,
    ) -> CoreResult<LibraryEntry> {
        Self::validate(&draft)?;
        self.ctx
            .library_repository()
            .update_owned(entry_id, identity_id, draft)
            .await?
            .ok_or(CoreError::EntryNotFound(entry_id))
    }

    /// Hard delete of an owned entry. A miss (unknown id or foreign owner)
    /// is `EntryNotFound`.
    pub async fn delete(&self, entry_id: i64, identity_id: i64) -> CoreResult<()> {
        let removed = self
            .ctx
            .library_repository()
            .delete_owned(entry_id, identity_id)
            .await?;
        if !removed {
            return Err(CoreError::EntryNotFound(entry_id));
        }
        log::info!("Identity {identity_id} deleted entry {entry_id}");
        Ok(())
    }

    fn validate(draft: &EntryDraft) -> CoreResult<()> {
        if draft.title.trim().is_empty() || draft.platform.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Title and platform are required".to_string(),
            ));
        }
        Ok(())
    }
}
