//! Session token claims.
//!
//! Two kinds of token share one claims structure:
//!
//! - `access`: carries `user_id` and `dormitory_id`, short-lived.
//! - `refresh`: carries `user_id` only, long-lived.
//!
//! Wire names are `user_id`, `dormitory_id`, `iat`, `exp` and `type`.

use chrono::{Duration, Utc};
use dorm_core::UserId;
use serde::{Deserialize, Serialize};

/// Purpose of a token, stored in the `type` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Refresh => "refresh",
        }
    }
}

/// Claims signed into every session token.
///
/// # Example
///
/// ```rust
/// use dorm_auth::{JwtClaims, TokenType};
/// use dorm_core::UserId;
///
/// let claims = JwtClaims::builder(UserId::new(), TokenType::Access)
///     .dormitory_id("D1")
///     .ttl(chrono::Duration::minutes(15))
///     .build();
///
/// assert_eq!(claims.exp - claims.iat, 15 * 60);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwtClaims {
    /// Subject of the token.
    pub user_id: UserId,

    /// Dormitory scope. Present on access tokens only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dormitory_id: Option<String>,

    /// Issued at as Unix timestamp.
    pub iat: i64,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl JwtClaims {
    /// Create a builder for the given subject and token kind.
    #[must_use]
    pub fn builder(user_id: UserId, token_type: TokenType) -> JwtClaimsBuilder {
        JwtClaimsBuilder {
            user_id,
            token_type,
            dormitory_id: None,
            iat: None,
            ttl: None,
        }
    }
}

/// Builder for constructing JWT claims.
#[derive(Debug)]
pub struct JwtClaimsBuilder {
    user_id: UserId,
    token_type: TokenType,
    dormitory_id: Option<String>,
    iat: Option<i64>,
    ttl: Option<Duration>,
}

impl JwtClaimsBuilder {
    /// Set the dormitory scope.
    #[must_use]
    pub fn dormitory_id(mut self, dormitory_id: impl Into<String>) -> Self {
        self.dormitory_id = Some(dormitory_id.into());
        self
    }

    /// Set the issued at time.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.iat = Some(iat);
        self
    }

    /// Set the lifetime; `exp` becomes `iat + ttl`.
    #[must_use]
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Build the JWT claims.
    ///
    /// # Defaults
    ///
    /// - `iat`: current time if not set
    /// - `exp`: `iat` + ttl, or `iat` + 1 hour if no ttl is set
    #[must_use]
    pub fn build(self) -> JwtClaims {
        let iat = self.iat.unwrap_or_else(|| Utc::now().timestamp());
        let exp = iat + self.ttl.map_or(3600, |ttl| ttl.num_seconds());

        JwtClaims {
            user_id: self.user_id,
            dormitory_id: self.dormitory_id,
            iat,
            exp,
            token_type: self.token_type,
        }
    }
}
