/**
 * Credential Hashing
 *
 * This module wraps bcrypt for password storage and verification.
 * Hashing is one-way; there is no way to recover the plaintext.
 *
 * # Usage
 *
 * - Signup hashes the supplied password and stores the digest.
 * - Signin looks the user up by email alone, then verifies the supplied
 *   password against the stored digest. The store is never queried by
 *   (email, digest) pairs, so a wrong password and an unknown email are
 *   indistinguishable to the caller.
 */

use bcrypt::{hash, verify, DEFAULT_COST};
use crate::error::ApiError;

/// Hash a plaintext password for storage
///
/// # Errors
///
/// `ApiError::Internal` if the underlying primitive fails; the cause is
/// logged server-side.
pub fn hash_password(plaintext: &str) -> Result<String, ApiError> {
    hash(plaintext, DEFAULT_COST).map_err(|e| {
        tracing::error!("failed to hash password: {e:?}");
        ApiError::Internal
    })
}

/// Verify a plaintext password against a stored digest
///
/// Returns `Ok(false)` on mismatch; `Err` only when the digest itself is
/// unreadable (treated as an internal failure, not a bad credential).
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, ApiError> {
    verify(plaintext, digest).map_err(|e| {
        tracing::error!("failed to verify password: {e:?}");
        ApiError::Internal
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let digest = hash_password("secret123").unwrap();
        assert!(verify_password("secret123", &digest).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let digest = hash_password("secret123").unwrap();
        assert!(!verify_password("not-the-password", &digest).unwrap());
    }

    #[test]
    fn test_digest_is_not_plaintext() {
        let digest = hash_password("secret123").unwrap();
        assert_ne!(digest, "secret123");
        assert!(digest.starts_with("$2"));
    }

    #[test]
    fn test_malformed_digest_is_internal_error() {
        let result = verify_password("secret123", "not-a-bcrypt-digest");
        assert_eq!(result.unwrap_err(), ApiError::Internal);
    }
}
