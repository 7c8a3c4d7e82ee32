//! In-process ephemeral store.
//!
//! A single `MemoryStore` implements `IdentityRepository`,
//! `ProfileRepository`, and `LibraryRepository` against plain collections
//! behind one `RwLock`. Nothing survives the process; the store exists so
//! the application runs without a writable database path, with the same
//! observable behavior as `SqliteStore`.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use gameshelf_core::error::{CoreError, CoreResult};
use gameshelf_core::traits::{IdentityRepository, LibraryRepository, ProfileRepository};
use gameshelf_core::types::{
    EntryDraft, Identity, LibraryEntry, NewIdentity, Profile, ProfileUpdate, PublicIdentity,
    DEFAULT_THEME_COLOR,
};

/// Profile row as stored. `username` is joined from the identity on read,
/// mirroring the durable schema where it lives on the users table.
#[derive(Debug, Clone)]
struct ProfileRow {
    id: i64,
    identity_id: i64,
    display_name: Option<String>,
    bio: Option<String>,
    avatar_url: Option<String>,
    theme_color: Option<String>,
    banner_url: Option<String>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

#[derive(Debug, Default)]
struct MemoryData {
    identities: Vec<Identity>,
    profiles: Vec<ProfileRow>,
    entries: Vec<LibraryEntry>,
    // Per-entity counters, pre-incremented so the first id is 1. Ids stay
    // monotonic across deletes, matching AUTOINCREMENT on the durable side.
    last_identity_id: i64,
    last_profile_id: i64,
    last_entry_id: i64,
}

/// Ephemeral store backed by in-process collections.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<MemoryData>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn join_profile(row: &ProfileRow, username: &str) -> Profile {
    Profile {
        id: row.id,
        identity_id: row.identity_id,
        username: username.to_string(),
        display_name: row.display_name.clone(),
        bio: row.bio.clone(),
        avatar_url: row.avatar_url.clone(),
        theme_color: row.theme_color.clone(),
        banner_url: row.banner_url.clone(),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

#[async_trait]
impl IdentityRepository for MemoryStore {
    async fn create_with_profile(&self, new: NewIdentity) -> CoreResult<Identity> {
        let mut data = self.data.write().await;

        if data.identities.iter().any(|i| i.username == new.username) {
            return Err(CoreError::Conflict(new.username));
        }

        let now = Utc::now();
        data.last_identity_id += 1;
        let identity = Identity {
            id: data.last_identity_id,
            username: new.username,
            secret_hash: new.secret_hash,
            created_at: now,
        };
        data.identities.push(identity.clone());

        data.last_profile_id += 1;
        let profile = ProfileRow {
            id: data.last_profile_id,
            identity_id: identity.id,
            display_name: Some(identity.username.clone()),
            bio: None,
            avatar_url: None,
            theme_color: Some(DEFAULT_THEME_COLOR.to_string()),
            banner_url: None,
            created_at: now,
            updated_at: now,
        };
        data.profiles.push(profile);

        Ok(identity)
    }

    async fn find_by_username(&self, username: &str) -> CoreResult<Option<Identity>> {
        let data = self.data.read().await;
        Ok(data
            .identities
            .iter()
            .find(|i| i.username == username)
            .cloned())
    }

    async fn find_public(&self, id: i64) -> CoreResult<Option<PublicIdentity>> {
        let data = self.data.read().await;
        Ok(data
            .identities
            .iter()
            .find(|i| i.id == id)
            .map(Identity::to_public))
    }

    async fn delete(&self, id: i64) -> CoreResult<()> {
        let mut data = self.data.write().await;

        if !data.identities.iter().any(|i| i.id == id) {
            return Err(CoreError::IdentityNotFound(id));
        }

        // Same cascade as the durable backend: profile and entries go with
        // the identity.
        data.identities.retain(|i| i.id != id);
        data.profiles.retain(|p| p.identity_id != id);
        data.entries.retain(|e| e.identity_id != id);

        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn find_by_identity(&self, identity_id: i64) -> CoreResult<Option<Profile>> {
        let data = self.data.read().await;

        let Some(row) = data.profiles.iter().find(|p| p.identity_id == identity_id) else {
            return Ok(None);
        };
        let username = data
            .identities
            .iter()
            .find(|i| i.id == identity_id)
            .map(|i| i.username.clone())
            .ok_or_else(|| {
                CoreError::StorageError(format!("Profile {} has no owning identity", row.id))
            })?;

        Ok(Some(join_profile(row, &username)))
    }

    async fn replace(
        &self,
        identity_id: i64,
        update: ProfileUpdate,
    ) -> CoreResult<Option<Profile>> {
        let mut data = self.data.write().await;

        let username = match data.identities.iter().find(|i| i.id == identity_id) {
            Some(identity) => identity.username.clone(),
            None => return Ok(None),
        };
        let Some(row) = data
            .profiles
            .iter_mut()
            .find(|p| p.identity_id == identity_id)
        else {
            return Ok(None);
        };

        row.display_name = update.display_name;
        row.bio = update.bio;
        row.avatar_url = update.avatar_url;
        row.theme_color = update.theme_color;
        row.banner_url = update.banner_url;
        row.updated_at = Utc::now();

        Ok(Some(join_profile(row, &username)))
    }
}

#[async_trait]
impl LibraryRepository for MemoryStore {
    async fn list_for(&self, identity_id: i64) -> CoreResult<Vec<LibraryEntry>> {
        let data = self.data.read().await;
        let mut entries: Vec<LibraryEntry> = data
            .entries
            .iter()
            .filter(|e| e.identity_id == identity_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(entries)
    }

    async fn create(&self, identity_id: i64, draft: EntryDraft) -> CoreResult<LibraryEntry> {
        let mut data = self.data.write().await;

        // The durable backend's FK rejects orphan entries; match it.
        if !data.identities.iter().any(|i| i.id == identity_id) {
            return Err(CoreError::StorageError(format!(
                "Failed to insert entry: no identity {identity_id}"
            )));
        }

        let now = Utc::now();
        data.last_entry_id += 1;
        let entry = LibraryEntry {
            id: data.last_entry_id,
            identity_id,
            catalog_id: draft.catalog_id,
            title: draft.title.clone(),
            platform: draft.platform.clone(),
            status: draft.status_or_default(),
            progress: draft.progress_or_default(),
            rating: draft.rating,
            cover_url: draft.cover_url.clone(),
            genres: draft.genres_or_default(),
            playtime: draft.playtime_or_default(),
            started_date: draft.started_date.clone(),
            completed_date: draft.completed_date.clone(),
            notes: draft.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        data.entries.push(entry.clone());

        Ok(entry)
    }

    async fn find_owned(
        &self,
        entry_id: i64,
        identity_id: i64,
    ) -> CoreResult<Option<LibraryEntry>> {
        let data = self.data.read().await;
        Ok(data
            .entries
            .iter()
            .find(|e| e.id == entry_id && e.identity_id == identity_id)
            .cloned())
    }

    async fn update_owned(
        &self,
        entry_id: i64,
        identity_id: i64,
        draft: EntryDraft,
    ) -> CoreResult<Option<LibraryEntry>> {
        let mut data = self.data.write().await;

        let Some(entry) = data
            .entries
            .iter_mut()
            .find(|e| e.id == entry_id && e.identity_id == identity_id)
        else {
            return Ok(None);
        };

        // The catalog link is set at creation and survives updates.
        entry.title = draft.title.clone();
        entry.platform = draft.platform.clone();
        entry.status = draft.status_or_default();
        entry.progress = draft.progress_or_default();
        entry.rating = draft.rating;
        entry.cover_url = draft.cover_url.clone();
        entry.genres = draft.genres_or_default();
        entry.playtime = draft.playtime_or_default();
        entry.started_date = draft.started_date.clone();
        entry.completed_date = draft.completed_date.clone();
        entry.notes = draft.notes.clone();
        entry.updated_at = Utc::now();

        Ok(Some(entry.clone()))
    }

    async fn delete_owned(&self, entry_id: i64, identity_id: i64) -> CoreResult<bool> {
        let mut data = self.data.write().await;
        let before = data.entries.len();
        data.entries
            .retain(|e| !(e.id == entry_id && e.identity_id == identity_id));
        Ok(data.entries.len() < before)
    }
}
