//! Registration, login, and the session authorization gate.

use std::sync::Arc;

use crate::auth::password;
use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{AuthOutcome, NewIdentity, PublicIdentity};

/// Minimum accepted username length.
const MIN_USERNAME_LEN: usize = 3;
/// Minimum accepted secret length.
const MIN_SECRET_LEN: usize = 6;

/// Identity lifecycle and credential verification service.
pub struct AuthService {
    ctx: Arc<ServiceContext>,
}

impl AuthService {
    /// Create an auth service instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Register a new identity.
    ///
    /// Validates the inputs, hashes the secret, creates identity + profile
    /// atomically, and issues a session token. The username existence check
    /// here is advisory; the storage layer's uniqueness constraint is the
    /// authoritative guard and closes the race.
    pub async fn register(&self, username: &str, secret: &str) -> CoreResult<AuthOutcome> {
        if username.is_empty() || secret.is_empty() {
            return Err(CoreError::ValidationError(
                "Username and password are required".to_string(),
            ));
        }
        if username.len() < MIN_USERNAME_LEN {
            return Err(CoreError::ValidationError(format!(
                "Username must be at least {MIN_USERNAME_LEN} characters"
            )));
        }
        if secret.len() < MIN_SECRET_LEN {
            return Err(CoreError::ValidationError(format!(
                "Password must be at least {MIN_SECRET_LEN} characters"
            )));
        }

        if self
            .ctx
            .identity_repository()
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(username.to_string()));
        }

        let secret_hash = password::hash_secret(secret)?;
        let identity = self
            .ctx
            .identity_repository()
            .create_with_profile(NewIdentity {
                username: username.to_string(),
                secret_hash,
            })
            .await?;

        log::info!("Registered identity {} ({username})", identity.id);

        let session = self.ctx.session_signer().issue(identity.id)?;
        Ok(AuthOutcome {
            identity: identity.to_public(),
            session,
        })
    }

    /// Verify credentials and issue a session token.
    ///
    /// Unknown username and wrong secret take different internal paths but
    /// surface the same `InvalidCredentials` value, so the caller cannot
    /// enumerate usernames.
    pub async fn login(&self, username: &str, secret: &str) -> CoreResult<AuthOutcome> {
        if username.is_empty() || secret.is_empty() {
            return Err(CoreError::ValidationError(
                "Username and password are required".to_string(),
            ));
        }

        let Some(identity) = self
            .ctx
            .identity_repository()
            .find_by_username(username)
            .await?
        else {
            log::debug!("Login attempt for unknown username");
            return Err(CoreError::InvalidCredentials);
        };

        if !password::verify_secret(secret, &identity.secret_hash)? {
            log::debug!("Login attempt with wrong secret for identity {}", identity.id);
            return Err(CoreError::InvalidCredentials);
        }

        let session = self.ctx.session_signer().issue(identity.id)?;
        Ok(AuthOutcome {
            identity: identity.to_public(),
            session,
        })
    }

    /// Verify a session token and return the asserted identity id.
    ///
    /// The authorization gate every store operation sits behind.
    pub fn identity_from_token(&self, token: &str) -> CoreResult<i64> {
        self.ctx.session_signer().verify(token)
    }

    /// Public projection of an identity (never includes the secret hash).
    pub async fn current_identity(&self, identity_id: i64) -> CoreResult<PublicIdentity> {
        self.ctx
            .identity_repository()
            .find_public(identity_id)
            .await?
            .ok_or(CoreError::IdentityNotFound(identity_id))
    }

    /// Delete an identity, cascading to its profile and library entries.
    pub async fn delete_identity(&self, identity_id: i64) -> CoreResult<()> {
        self.ctx.identity_repository().delete(identity_id).await?;
        log::info!("Deleted identity {identity_id} and its dependents");
        Ok(())
    }
}
