//! Library entry persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{EntryDraft, LibraryEntry};

/// Library entry warehouse Trait
///
/// Every read/mutate/delete filters by both entry id and owning identity id.
/// An id that exists but belongs to someone else behaves exactly like an id
/// that does not exist, so the store never leaks other users' entries.
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    /// All entries of an identity, newest first (creation time descending,
    /// id descending as tiebreak). Genres arrive decoded; an undecodable
    /// stored value degrades to an empty list rather than erroring.
    async fn list_for(&self, identity_id: i64) -> CoreResult<Vec<LibraryEntry>>;

    /// Create an entry with a fresh monotonic id, creation defaults applied,
    /// and both timestamps set to now.
    async fn create(&self, identity_id: i64, draft: EntryDraft) -> CoreResult<LibraryEntry>;

    /// Fetch one owned entry. `Ok(None)` covers both "no such id" and
    /// "owned by a different identity".
    async fn find_owned(&self, entry_id: i64, identity_id: i64)
        -> CoreResult<Option<LibraryEntry>>;

    /// Full-field replace of all mutable attributes, bumping `updated_at`.
    /// No partial-patch mode exists. The catalog link (`catalog_id`) is set
    /// at creation and is never rewritten here. Same ownership rule as
    /// `find_owned`.
    async fn update_owned(
        &self,
        entry_id: i64,
        identity_id: i64,
        draft: EntryDraft,
    ) -> CoreResult<Option<LibraryEntry>>;

    /// Hard delete. `true` iff a row matched the (id, owner) pair.
    async fn delete_owned(&self, entry_id: i64, identity_id: i64) -> CoreResult<bool>;
}
