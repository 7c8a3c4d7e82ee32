//! Platform-agnostic application bootstrap for Gameshelf.
//!
//! Provides the storage adapters (`SqliteStore`, `MemoryStore`), backend
//! selection (`StorageConfig` / `select_storage`), and `AppState` with its
//! builder. A frontend constructs `AppState` once at startup and calls
//! services through it; nothing above this crate knows which backend is
//! active.

pub mod adapters;

use std::path::PathBuf;
use std::sync::Arc;

use gameshelf_catalog::SteamCatalog;
use gameshelf_core::auth::SessionSigner;
use gameshelf_core::error::{CoreError, CoreResult};
use gameshelf_core::services::{
    AuthService, CatalogService, LibraryService, ProfileService, ServiceContext,
};
use gameshelf_core::traits::{IdentityRepository, LibraryRepository, ProfileRepository};

use adapters::{MemoryStore, SqliteStore};

/// Environment variable naming the SQLite database file. When unset the
/// ephemeral backend is selected.
pub const DB_PATH_ENV: &str = "GAMESHELF_DB";

/// Environment variable holding the session signing key.
pub const SESSION_KEY_ENV: &str = "GAMESHELF_SESSION_KEY";

/// Which storage backend to run on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// SQLite database at the given path.
    Durable(PathBuf),
    /// In-process collections, nothing persisted.
    Ephemeral,
}

/// Storage selection, resolved once at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Selected backend.
    pub backend: StorageBackend,
}

impl StorageConfig {
    /// Resolve the backend from the environment: `GAMESHELF_DB` set and
    /// non-empty selects the durable backend at that path, anything else
    /// falls back to the ephemeral one.
    #[must_use]
    pub fn from_env() -> Self {
        let backend = match std::env::var(DB_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => StorageBackend::Durable(PathBuf::from(path)),
            _ => StorageBackend::Ephemeral,
        };
        Self { backend }
    }
}

/// The three storage trait objects of the active backend, always from the
/// same underlying store.
pub struct Storage {
    /// Identity persistence.
    pub identities: Arc<dyn IdentityRepository>,
    /// Profile persistence.
    pub profiles: Arc<dyn ProfileRepository>,
    /// Library entry persistence.
    pub library: Arc<dyn LibraryRepository>,
}

/// Construct the storage bundle for the configured backend.
///
/// Called once at startup; the choice is immutable for the process lifetime.
/// Selecting the durable backend runs migrations before returning.
///
/// # Errors
/// Returns `CoreError::StorageError` if the SQLite store cannot be opened
/// or migrated.
pub async fn select_storage(config: &StorageConfig) -> CoreResult<Storage> {
    match &config.backend {
        StorageBackend::Durable(path) => {
            log::info!("Using durable storage at {}", path.display());
            let store = Arc::new(SqliteStore::new(path).await?);
            Ok(Storage {
                identities: Arc::clone(&store) as Arc<dyn IdentityRepository>,
                profiles: Arc::clone(&store) as Arc<dyn ProfileRepository>,
                library: store,
            })
        }
        StorageBackend::Ephemeral => {
            log::warn!("Using ephemeral storage, data will not survive restart");
            let store = Arc::new(MemoryStore::new());
            Ok(Storage {
                identities: Arc::clone(&store) as Arc<dyn IdentityRepository>,
                profiles: Arc::clone(&store) as Arc<dyn ProfileRepository>,
                library: store,
            })
        }
    }
}

/// Application state: the service container every frontend holds.
pub struct AppState {
    /// Service context (holds the storage adapters and session signer).
    pub ctx: Arc<ServiceContext>,
    /// Registration, login, and session verification.
    pub auth_service: AuthService,
    /// Profile reads and replaces.
    pub profile_service: ProfileService,
    /// Library entry CRUD.
    pub library_service: LibraryService,
    /// Steam catalog lookups.
    pub catalog_service: CatalogService,
}

/// Builder for constructing `AppState`.
///
/// # Required
/// - `storage` — the backend bundle from `select_storage`
/// - `session_key` — key material for the session signer
///
/// # Optional
/// - `catalog` — defaults to a fresh `SteamCatalog`
pub struct AppStateBuilder {
    storage: Option<Storage>,
    session_key: Option<Vec<u8>>,
    catalog: Option<Arc<SteamCatalog>>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: None,
            session_key: None,
            catalog: None,
        }
    }

    #[must_use]
    pub fn storage(mut self, storage: Storage) -> Self {
        self.storage = Some(storage);
        self
    }

    #[must_use]
    pub fn session_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.session_key = Some(key.into());
        self
    }

    /// Take the signing key from `GAMESHELF_SESSION_KEY`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if the variable is unset or
    /// blank.
    pub fn session_key_from_env(self) -> CoreResult<Self> {
        let key = std::env::var(SESSION_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                CoreError::ValidationError(format!("{SESSION_KEY_ENV} is required"))
            })?;
        Ok(self.session_key(key))
    }

    #[must_use]
    pub fn catalog(mut self, catalog: Arc<SteamCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the `AppState`.
    ///
    /// # Errors
    /// Returns `CoreError::ValidationError` if a required piece is missing,
    /// or a catalog error if the default HTTP client cannot be built.
    pub fn build(self) -> CoreResult<AppState> {
        let storage = self
            .storage
            .ok_or_else(|| CoreError::ValidationError("storage is required".to_string()))?;
        let session_key = self
            .session_key
            .ok_or_else(|| CoreError::ValidationError("session_key is required".to_string()))?;
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(SteamCatalog::new()?),
        };

        let signer = Arc::new(SessionSigner::new(session_key));
        let ctx = Arc::new(ServiceContext::new(
            storage.identities,
            storage.profiles,
            storage.library,
            signer,
        ));

        let auth_service = AuthService::new(Arc::clone(&ctx));
        let profile_service = ProfileService::new(Arc::clone(&ctx));
        let library_service = LibraryService::new(Arc::clone(&ctx));
        let catalog_service = CatalogService::new(catalog);

        Ok(AppState {
            ctx,
            auth_service,
            profile_service,
            library_service,
            catalog_service,
        })
    }
}

impl Default for AppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
