//! Password hashing with Argon2id.
//!
//! Every hash carries its own random salt, so hashing the same password twice
//! yields two different PHC strings that both verify. Verification compares
//! the derived output in constant time (argon2's `Output` equality).

use crate::error::AuthError;
use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

/// Fixed salt for [`PasswordHasher::verify_absent`].
const ABSENT_USER_SALT: &str = "ZG9ybWF1dGhhYnNlbnR1c2Vy";

/// Password hasher configuration.
///
/// Uses OWASP 2024 recommended parameters for Argon2id:
/// - Memory: 19456 KiB (19 MiB)
/// - Iterations: 2
/// - Parallelism: 1
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// Create a new password hasher with OWASP-recommended parameters.
    #[must_use]
    pub fn new() -> Self {
        // m=19456 (19 MiB), t=2, p=1
        let params = Params::new(19456, 2, 1, None)
            .expect("OWASP 2024 Argon2 parameters are valid constants");

        Self { params }
    }

    /// Create a password hasher with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if the parameters are rejected by Argon2.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, AuthError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AuthError::HashingFailed(format!("Invalid parameters: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash a password, returning a PHC-formatted string.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::HashingFailed` if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailed(format!("Hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verify a password against a PHC hash.
    ///
    /// `Ok(false)` is the normal negative result. The parameters embedded in
    /// the hash are used, not `self.params`, so hashes produced with other
    /// settings still verify.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidHashFormat` if `hash` is not a PHC string.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidHashFormat)?;

        match self.argon2().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(_) => Ok(false),
        }
    }

    /// Spend one verification's worth of work when there is no stored hash.
    ///
    /// Lets a lookup miss cost the same as a wrong password. Always `false`.
    pub fn verify_absent(&self, password: &str) -> bool {
        if let Ok(salt) = SaltString::from_b64(ABSENT_USER_SALT) {
            let _ = self.argon2().hash_password(password.as_bytes(), &salt);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_params(4096, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_returns_argon2id() {
        let hash = fast_hasher().hash("test-password").unwrap();
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_format_contains_params() {
        let hash = PasswordHasher::new().hash("test").unwrap();
        assert!(hash.contains("v=19"));
        assert!(hash.contains("m=19456"));
        assert!(hash.contains("t=2"));
        assert!(hash.contains("p=1"));
    }

    #[test]
    fn test_verify_password_correct_and_incorrect() {
        let hasher = fast_hasher();
        let hash = hasher.hash("correct-password").unwrap();

        assert!(hasher.verify("correct-password", &hash).unwrap());
        assert!(!hasher.verify("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_verify_invalid_hash_format() {
        let result = fast_hasher().verify("password", "not-a-valid-hash");
        assert!(matches!(result, Err(AuthError::InvalidHashFormat)));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = fast_hasher();
        let hash1 = hasher.hash("pw123456").unwrap();
        let hash2 = hasher.hash("pw123456").unwrap();

        assert_ne!(hash1, hash2);
        assert!(hasher.verify("pw123456", &hash1).unwrap());
        assert!(hasher.verify("pw123456", &hash2).unwrap());
    }

    #[test]
    fn test_verify_uses_params_embedded_in_hash() {
        let hash = fast_hasher().hash("portable").unwrap();
        assert!(PasswordHasher::new().verify("portable", &hash).unwrap());
    }

    #[test]
    fn test_unicode_and_empty_passwords() {
        let hasher = fast_hasher();

        let hash = hasher.hash("пароль日本語🔐").unwrap();
        assert!(hasher.verify("пароль日本語🔐", &hash).unwrap());

        let hash = hasher.hash("").unwrap();
        assert!(hasher.verify("", &hash).unwrap());
        assert!(!hasher.verify("non-empty", &hash).unwrap());
    }

    #[test]
    fn test_verify_absent_never_matches() {
        let hasher = fast_hasher();
        assert!(SaltString::from_b64(ABSENT_USER_SALT).is_ok());
        assert!(!hasher.verify_absent("pw123456"));
        assert!(!hasher.verify_absent(""));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let result = PasswordHasher::with_params(1, 1, 1);
        assert!(matches!(result, Err(AuthError::HashingFailed(_))));
    }
}
