//! Signed session assertions.
//!
//! The issuer signs `identity_id.expiry_unix` with HMAC-SHA256 and encodes
//! payload and signature as base64url. Verification checks the MAC before
//! trusting anything in the payload, then the expiry. This is the only
//! identity-assertion mode the stores accept; there is no unverified
//! explicit-id fallback.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use chrono::{DateTime, Duration, TimeZone, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{CoreError, CoreResult};
use crate::types::SessionToken;

type HmacSha256 = Hmac<Sha256>;

/// Session lifetime: 30 days.
const SESSION_TTL_DAYS: i64 = 30;

/// Issues and verifies signed identity assertions.
///
/// Constructed once at startup with the process-wide signing key.
pub struct SessionSigner {
    key: Vec<u8>,
}

impl SessionSigner {
    /// Create a signer from a raw key.
    #[must_use]
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    /// Issue a session token for an identity, valid for 30 days.
    pub fn issue(&self, identity_id: i64) -> CoreResult<SessionToken> {
        self.issue_at(identity_id, Utc::now())
    }

    /// Issue a token with an explicit issue time (exposed for expiry tests).
    pub fn issue_at(&self, identity_id: i64, now: DateTime<Utc>) -> CoreResult<SessionToken> {
        let expires_at = now + Duration::days(SESSION_TTL_DAYS);
        let payload = format!("{identity_id}.{}", expires_at.timestamp());
        let signature = self.sign(payload.as_bytes())?;

        Ok(SessionToken {
            token: format!(
                "{}.{}",
                BASE64URL.encode(payload.as_bytes()),
                BASE64URL.encode(signature)
            ),
            expires_at,
        })
    }

    /// Verify a token and return the asserted identity id.
    ///
    /// Returns `CoreError::Unauthorized` for any malformed, forged, or
    /// expired token; the message never echoes token contents.
    pub fn verify(&self, token: &str) -> CoreResult<i64> {
        let (payload_b64, signature_b64) = token
            .split_once('.')
            .ok_or_else(|| CoreError::Unauthorized("Malformed session token".to_string()))?;

        let payload = BASE64URL
            .decode(payload_b64)
            .map_err(|_| CoreError::Unauthorized("Malformed session token".to_string()))?;
        let signature = BASE64URL
            .decode(signature_b64)
            .map_err(|_| CoreError::Unauthorized("Malformed session token".to_string()))?;

        let mut mac = self.mac()?;
        mac.update(&payload);
        mac.verify_slice(&signature)
            .map_err(|_| CoreError::Unauthorized("Invalid session token".to_string()))?;

        // Only a payload we signed ourselves reaches this parse.
        let payload = String::from_utf8(payload)
            .map_err(|_| CoreError::Unauthorized("Invalid session token".to_string()))?;
        let (id_str, expiry_str) = payload
            .split_once('.')
            .ok_or_else(|| CoreError::Unauthorized("Invalid session token".to_string()))?;

        let identity_id: i64 = id_str
            .parse()
            .map_err(|_| CoreError::Unauthorized("Invalid session token".to_string()))?;
        let expiry: i64 = expiry_str
            .parse()
            .map_err(|_| CoreError::Unauthorized("Invalid session token".to_string()))?;
        let expires_at = Utc
            .timestamp_opt(expiry, 0)
            .single()
            .ok_or_else(|| CoreError::Unauthorized("Invalid session token".to_string()))?;

        if expires_at <= Utc::now() {
            return Err(CoreError::Unauthorized("Session expired".to_string()));
        }

        Ok(identity_id)
    }

    fn sign(&self, payload: &[u8]) -> CoreResult<Vec<u8>> {
        let mut mac = self.mac()?;
        mac.update(payload);
        Ok(mac.finalize().into_bytes().to_vec())
    }

    fn mac(&self) -> CoreResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.key)
            .map_err(|e| CoreError::StorageError(format!("Invalid session key: {e}")))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn signer() -> SessionSigner {
        SessionSigner::new(b"test-session-key".to_vec())
    }

    #[test]
    fn issue_then_verify_returns_identity_id() {
        let s = signer();
        let token = s.issue(42).unwrap();
        assert_eq!(s.verify(&token.token).unwrap(), 42);
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let s = signer();
        let token = s.issue(1).unwrap().token;
        let (_, signature) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", BASE64URL.encode("2.9999999999"), signature);
        assert!(matches!(
            s.verify(&forged),
            Err(CoreError::Unauthorized(_))
        ));
    }

    #[test]
    fn wrong_key_is_rejected() {
        let token = signer().issue(1).unwrap().token;
        let other = SessionSigner::new(b"another-key".to_vec());
        assert!(matches!(other.verify(&token), Err(CoreError::Unauthorized(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let s = signer();
        let issued_long_ago = Utc::now() - Duration::days(SESSION_TTL_DAYS + 1);
        let token = s.issue_at(7, issued_long_ago).unwrap();
        assert!(matches!(
            s.verify(&token.token),
            Err(CoreError::Unauthorized(msg)) if msg == "Session expired"
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(signer().verify("not.a.token").is_err());
        assert!(signer().verify("nodotatall").is_err());
        assert!(signer().verify("").is_err());
    }
}
