//! Response DTOs for authentication endpoints.

use dorm_core::{UserId, UserRole};
use serde::{Deserialize, Serialize};

use crate::services::{AuthSession, TokenPair};

/// Token pair returned by `/auth/refresh`.
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Always "Bearer".
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

impl TokenResponse {
    #[must_use]
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self::new(pair.access_token, pair.refresh_token, pair.expires_in)
    }
}

/// Identity plus token pair returned by `/auth/register` and `/auth/login`.
#[derive(Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user_id: UserId,
    pub dormitory_id: String,
    #[serde(flatten)]
    pub tokens: TokenResponse,
}

impl From<AuthSession> for SessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            user_id: session.user_id,
            dormitory_id: session.dormitory_id,
            tokens: session.tokens.into(),
        }
    }
}

/// A user's current scope and role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user_id: UserId,
    pub dormitory_id: String,
    pub role: UserRole,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for SessionResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionResponse")
            .field("user_id", &self.user_id)
            .field("dormitory_id", &self.dormitory_id)
            .field("tokens", &self.tokens)
            .finish()
    }
}
