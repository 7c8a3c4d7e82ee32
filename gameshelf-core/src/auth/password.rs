//! Credential hashing.
//!
//! Secrets are hashed with PBKDF2-HMAC-SHA256 through the `password_hash`
//! PHC-string API. The work factor comes from the crate's recommended
//! parameters (600k iterations), well above the "ten bcrypt rounds"
//! equivalent the stored format was originally created with.

use pbkdf2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Pbkdf2,
};

use crate::error::{CoreError, CoreResult};

/// Hash a raw secret into a PHC string with a fresh random salt.
pub fn hash_secret(raw: &str) -> CoreResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Pbkdf2
        .hash_password(raw.as_bytes(), &salt)
        .map_err(|e| CoreError::StorageError(format!("Failed to hash secret: {e}")))?;
    Ok(hash.to_string())
}

/// Verify a raw secret against a stored PHC string.
///
/// Goes through the hash-verify primitive, never string equality. A stored
/// hash that does not parse is a storage defect and surfaces as an error
/// rather than a silent mismatch.
pub fn verify_secret(raw: &str, stored: &str) -> CoreResult<bool> {
    let parsed = PasswordHash::new(stored)
        .map_err(|e| CoreError::StorageError(format!("Stored secret hash is invalid: {e}")))?;
    Ok(Pbkdf2.verify_password(raw.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_secret("secret1").unwrap();
        assert!(verify_secret("secret1", &hash).unwrap());
        assert!(!verify_secret("secret2", &hash).unwrap());
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_secret("same-secret").unwrap();
        let b = hash_secret("same-secret").unwrap();
        assert_ne!(a, b, "two hashes of one secret must differ by salt");
    }

    #[test]
    fn hash_is_phc_format_not_plaintext() {
        let hash = hash_secret("secret1").unwrap();
        assert!(hash.starts_with("$pbkdf2-sha256$"));
        assert!(!hash.contains("secret1"));
    }

    #[test]
    fn garbage_stored_hash_is_an_error() {
        let result = verify_secret("secret1", "not-a-phc-string");
        assert!(result.is_err());
    }
}
