//! Test helper module.
//!
//! Provides a mock store implementing all three repository traits, with
//! injectable failures, plus a factory for a wired-up `ServiceContext`.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::auth::SessionSigner;
use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{IdentityRepository, LibraryRepository, ProfileRepository};
use crate::types::{
    EntryDraft, Identity, LibraryEntry, NewIdentity, Profile, ProfileUpdate, PublicIdentity,
    DEFAULT_THEME_COLOR,
};

/// Profile row as stored: username is joined from the identity on read.
#[derive(Debug, Clone)]
struct StoredProfile {
    id: i64,
    identity_id: i64,
    display_name: Option<String>,
    bio: Option<String>,
    avatar_url: Option<String>,
    theme_color: Option<String>,
    banner_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Default)]
struct MockData {
    identities: Vec<Identity>,
    profiles: Vec<StoredProfile>,
    entries: Vec<LibraryEntry>,
    // Monotonic per entity kind; pre-incremented so the first id is 1.
    last_identity_id: i64,
    last_profile_id: i64,
    last_entry_id: i64,
}

/// In-memory mock implementing all three storage traits.
pub struct MockStore {
    data: RwLock<MockData>,
    /// If Some, `create_with_profile` fails with this error (for testing
    /// failure propagation).
    create_error: RwLock<Option<String>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            data: RwLock::new(MockData::default()),
            create_error: RwLock::new(None),
        }
    }

    pub async fn set_create_error(&self, err: Option<String>) {
        *self.create_error.write().await = err;
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityRepository for MockStore {
    async fn create_with_profile(&self, new: NewIdentity) -> CoreResult<Identity> {
        if let Some(ref msg) = *self.create_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }

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
        let profile = StoredProfile {
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
        data.identities.retain(|i| i.id != id);
        data.profiles.retain(|p| p.identity_id != id);
        data.entries.retain(|e| e.identity_id != id);
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for MockStore {
    async fn find_by_identity(&self, identity_id: i64) -> CoreResult<Option<Profile>> {
        let data = self.data.read().await;
        let Some(stored) = data.profiles.iter().find(|p| p.identity_id == identity_id) else {
            return Ok(None);
        };
        let username = data
            .identities
            .iter()
            .find(|i| i.id == identity_id)
            .map(|i| i.username.clone())
            .unwrap_or_default();
        Ok(Some(Profile {
            id: stored.id,
            identity_id: stored.identity_id,
            username,
            display_name: stored.display_name.clone(),
            bio: stored.bio.clone(),
            avatar_url: stored.avatar_url.clone(),
            theme_color: stored.theme_color.clone(),
            banner_url: stored.banner_url.clone(),
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }))
    }

    async fn replace(
        &self,
        identity_id: i64,
        update: ProfileUpdate,
    ) -> CoreResult<Option<Profile>> {
        {
            let mut data = self.data.write().await;
            let Some(stored) = data
                .profiles
                .iter_mut()
                .find(|p| p.identity_id == identity_id)
            else {
                return Ok(None);
            };
            stored.display_name = update.display_name;
            stored.bio = update.bio;
            stored.avatar_url = update.avatar_url;
            stored.theme_color = update.theme_color;
            stored.banner_url = update.banner_url;
            stored.updated_at = Utc::now();
        }
        self.find_by_identity(identity_id).await
    }
}

#[async_trait]
impl LibraryRepository for MockStore {
    async fn list_for(&self, identity_id: i64) -> CoreResult<Vec<LibraryEntry>> {
        let data = self.data.read().await;
        let mut entries: Vec<LibraryEntry> = data
            .entries
            .iter()
            .filter(|e| e.identity_id == identity_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(entries)
    }

    async fn create(&self, identity_id: i64, draft: EntryDraft) -> CoreResult<LibraryEntry> {
        let mut data = self.data.write().await;
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
            started_date: draft.started_date,
            completed_date: draft.completed_date,
            notes: draft.notes,
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
        entry.title = draft.title.clone();
        entry.platform = draft.platform.clone();
        entry.status = draft.status_or_default();
        entry.progress = draft.progress_or_default();
        entry.rating = draft.rating;
        entry.cover_url = draft.cover_url.clone();
        entry.genres = draft.genres_or_default();
        entry.playtime = draft.playtime_or_default();
        entry.started_date = draft.started_date;
        entry.completed_date = draft.completed_date;
        entry.notes = draft.notes;
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

/// Signing key shared by all core unit tests.
const TEST_SESSION_KEY: &[u8] = b"gameshelf-test-session-key";

/// Build a `ServiceContext` backed by a fresh `MockStore`.
pub fn create_test_context() -> (Arc<ServiceContext>, Arc<MockStore>) {
    let store = Arc::new(MockStore::new());
    let ctx = Arc::new(ServiceContext::new(
        Arc::clone(&store) as Arc<dyn IdentityRepository>,
        Arc::clone(&store) as Arc<dyn ProfileRepository>,
        Arc::clone(&store) as Arc<dyn LibraryRepository>,
        Arc::new(SessionSigner::new(TEST_SESSION_KEY.to_vec())),
    ));
    (ctx, store)
}
