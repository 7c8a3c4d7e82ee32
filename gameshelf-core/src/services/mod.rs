//! Business logic service layer.

mod auth_service;
mod catalog_service;
mod library_service;
mod profile_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use library_service::LibraryService;
pub use profile_service::ProfileService;

use std::sync::Arc;

use crate::auth::SessionSigner;
use crate::traits::{IdentityRepository, LibraryRepository, ProfileRepository};

/// Service context - holds all dependencies.
///
/// The platform layer creates this context once at startup and injects its
/// chosen storage backend. Both backends satisfy the same traits, so nothing
/// above this point knows which one is active.
pub struct ServiceContext {
    identity_repository: Arc<dyn IdentityRepository>,
    profile_repository: Arc<dyn ProfileRepository>,
    library_repository: Arc<dyn LibraryRepository>,
    session_signer: Arc<SessionSigner>,
}

impl ServiceContext {
    /// Create a service context.
    #[must_use]
    pub fn new(
        identity_repository: Arc<dyn IdentityRepository>,
        profile_repository: Arc<dyn ProfileRepository>,
        library_repository: Arc<dyn LibraryRepository>,
        session_signer: Arc<SessionSigner>,
    ) -> Self {
        Self {
            identity_repository,
            profile_repository,
            library_repository,
            session_signer,
        }
    }

    /// Identity repository of the active backend.
    #[must_use]
    pub fn identity_repository(&self) -> &Arc<dyn IdentityRepository> {
        &self.identity_repository
    }

    /// Profile repository of the active backend.
    #[must_use]
    pub fn profile_repository(&self) -> &Arc<dyn ProfileRepository> {
        &self.profile_repository
    }

    /// Library repository of the active backend.
    #[must_use]
    pub fn library_repository(&self) -> &Arc<dyn LibraryRepository> {
        &self.library_repository
    }

    /// Session token issuer/verifier.
    #[must_use]
    pub fn session_signer(&self) -> &Arc<SessionSigner> {
        &self.session_signer
    }
}
