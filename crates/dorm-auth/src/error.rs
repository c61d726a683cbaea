//! Error types for hashing and token operations.

use thiserror::Error;

/// Authentication primitive errors.
///
/// A password mismatch is never an error: `verify` returns `Ok(false)`.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // JWT errors
    /// Token has expired (exp claim is in the past).
    #[error("Token has expired")]
    TokenExpired,

    /// Token signature is invalid.
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token format is malformed or invalid.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token decoded fine but carries the wrong `type` claim.
    #[error("Wrong token type: expected {expected}, got {actual}")]
    WrongTokenType {
        expected: &'static str,
        actual: &'static str,
    },

    /// Signing failed after the key was accepted.
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    /// Signing secret is missing or unusable.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    // Password errors
    /// Password hashing operation failed.
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored password hash is not a valid PHC string.
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

impl AuthError {
    /// Check if this error is raised while validating a presented token.
    #[must_use]
    pub fn is_jwt_error(&self) -> bool {
        matches!(
            self,
            AuthError::TokenExpired
                | AuthError::InvalidSignature
                | AuthError::InvalidToken(_)
                | AuthError::WrongTokenType { .. }
        )
    }
}
