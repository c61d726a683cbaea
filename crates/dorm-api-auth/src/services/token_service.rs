//! Session token issuance.
//!
//! Access tokens carry the user and dormitory and live 15 minutes. Refresh
//! tokens carry only the user and live 7 days. Both are HS256-signed with
//! one shared secret, fixed for the lifetime of the issuer.

use chrono::{Duration, Utc};
use dorm_auth::{decode_token_of_type, encode_token, JwtClaims, TokenType};
use dorm_core::UserId;

use crate::error::ApiAuthError;

/// Access token validity in minutes.
pub const ACCESS_TOKEN_VALIDITY_MINUTES: i64 = 15;

/// Refresh token validity in days.
pub const REFRESH_TOKEN_VALIDITY_DAYS: i64 = 7;

/// A freshly minted access/refresh pair.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

/// Mints and validates session tokens.
pub trait TokenIssuer: Send + Sync {
    /// Issue an access/refresh pair for the given identity.
    ///
    /// # Errors
    ///
    /// `ApiAuthError::Internal` if signing fails.
    fn issue(&self, user_id: UserId, dormitory_id: &str) -> Result<TokenPair, ApiAuthError>;

    /// Check signature, expiry and `type` of a presented token.
    ///
    /// # Errors
    ///
    /// `ApiAuthError::Unauthorized` if the token is rejected.
    fn validate(&self, token: &str, expected: TokenType) -> Result<JwtClaims, ApiAuthError>;
}

/// HS256 implementation of [`TokenIssuer`].
#[derive(Clone)]
pub struct JwtTokenIssuer {
    secret: Vec<u8>,
    access_token_validity: Duration,
    refresh_token_validity: Duration,
}

impl std::fmt::Debug for JwtTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenIssuer")
            .field("access_token_validity", &self.access_token_validity)
            .field("refresh_token_validity", &self.refresh_token_validity)
            .finish_non_exhaustive()
    }
}

impl JwtTokenIssuer {
    /// Create an issuer with the standard lifetimes.
    ///
    /// # Errors
    ///
    /// `ApiAuthError::Internal` if `secret` is empty.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self, ApiAuthError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ApiAuthError::Internal("JWT secret is empty".to_string()));
        }

        Ok(Self {
            secret,
            access_token_validity: Duration::minutes(ACCESS_TOKEN_VALIDITY_MINUTES),
            refresh_token_validity: Duration::days(REFRESH_TOKEN_VALIDITY_DAYS),
        })
    }

    fn sign(&self, claims: &JwtClaims, kind: &str) -> Result<String, ApiAuthError> {
        encode_token(claims, &self.secret).map_err(|e| {
            ApiAuthError::Internal(format!("error while generating {kind} token: {e}"))
        })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: UserId, dormitory_id: &str) -> Result<TokenPair, ApiAuthError> {
        // One timestamp for both tokens.
        let now = Utc::now().timestamp();

        let access_claims = JwtClaims::builder(user_id, TokenType::Access)
            .dormitory_id(dormitory_id)
            .issued_at(now)
            .ttl(self.access_token_validity)
            .build();

        let refresh_claims = JwtClaims::builder(user_id, TokenType::Refresh)
            .issued_at(now)
            .ttl(self.refresh_token_validity)
            .build();

        Ok(TokenPair {
            access_token: self.sign(&access_claims, "access")?,
            refresh_token: self.sign(&refresh_claims, "refresh")?,
            expires_in: self.access_token_validity.num_seconds(),
        })
    }

    fn validate(&self, token: &str, expected: TokenType) -> Result<JwtClaims, ApiAuthError> {
        Ok(decode_token_of_type(token, &self.secret, expected)?)
    }
}
