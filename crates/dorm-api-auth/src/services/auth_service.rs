//! Authentication service for user operations.
//!
//! Handles registration, login, token refresh and user lookup. Storage goes
//! through a [`UserRepository`]; tokens come from a [`TokenIssuer`]. The
//! service holds no mutable state and is shared across requests behind an
//! `Arc`.

use std::sync::Arc;

use dorm_auth::{PasswordHasher, TokenType};
use dorm_core::{UserId, UserRole};
use dorm_db::{CreateUserRequest, FindUserByEmailRequest, FindUserByIdRequest, UserRepository};

use crate::error::ApiAuthError;
use crate::models::UserInfo;
use crate::services::token_service::{TokenIssuer, TokenPair};

/// How `refresh` decides whose tokens to mint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Mint for the identity supplied by the transport layer. The presented
    /// tokens are not inspected.
    #[default]
    TrustHeaders,
    /// Require a valid refresh token whose subject matches the supplied user.
    VerifyRefreshToken,
}

/// Result of a successful registration or login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub user_id: UserId,
    pub dormitory_id: String,
    pub tokens: TokenPair,
}

/// Service for user authentication operations.
#[derive(Clone)]
pub struct AuthService {
    repository: Arc<dyn UserRepository>,
    token_issuer: Arc<dyn TokenIssuer>,
    password_hasher: PasswordHasher,
    refresh_policy: RefreshPolicy,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>, token_issuer: Arc<dyn TokenIssuer>) -> Self {
        Self {
            repository,
            token_issuer,
            password_hasher: PasswordHasher::default(),
            refresh_policy: RefreshPolicy::default(),
        }
    }

    /// Replace the password hasher (tests use cheap parameters).
    #[must_use]
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    #[must_use]
    pub fn with_refresh_policy(mut self, refresh_policy: RefreshPolicy) -> Self {
        self.refresh_policy = refresh_policy;
        self
    }

    #[must_use]
    pub fn refresh_policy(&self) -> RefreshPolicy {
        self.refresh_policy
    }

    /// Register a new student.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::BadRequest` if any field is empty
    /// - `ApiAuthError::Conflict` if the email is already registered
    /// - `ApiAuthError::Internal` on hashing, store or signing failure
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        dormitory_id: &str,
    ) -> Result<AuthSession, ApiAuthError> {
        self.register_with_role(email, password, dormitory_id, UserRole::Student)
            .await
    }

    /// Register a user with an explicit role.
    pub async fn register_with_role(
        &self,
        email: &str,
        password: &str,
        dormitory_id: &str,
        role: UserRole,
    ) -> Result<AuthSession, ApiAuthError> {
        require_non_empty("email", email)?;
        require_non_empty("password", password)?;
        require_non_empty("dormitory_id", dormitory_id)?;

        let password_hash = self
            .password_hasher
            .hash(password)
            .map_err(|e| ApiAuthError::Internal(format!("Password hashing failed: {e}")))?;

        let created = self
            .repository
            .create_user(
                CreateUserRequest::student(email, password_hash, dormitory_id).with_role(role),
            )
            .await?;

        tracing::info!(
            user_id = %created.user_id,
            dormitory_id = %created.dormitory_id,
            role = %role,
            "User registered successfully"
        );

        let tokens = self
            .token_issuer
            .issue(created.user_id, &created.dormitory_id)?;

        Ok(AuthSession {
            user_id: created.user_id,
            dormitory_id: created.dormitory_id,
            tokens,
        })
    }

    /// Authenticate a user with email and password.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::NotFound` if no user has this email
    /// - `ApiAuthError::Unauthorized` if the password does not match
    /// - `ApiAuthError::Internal` on store or signing failure
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiAuthError> {
        require_non_empty("email", email)?;

        let user = match self
            .repository
            .find_user_by_email(FindUserByEmailRequest {
                email: email.to_string(),
            })
            .await
        {
            Ok(user) => user,
            Err(e) => {
                if e.is_not_found() {
                    self.password_hasher.verify_absent(password);
                }
                return Err(e.into());
            }
        };

        let matches = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| ApiAuthError::Internal(format!("Stored hash unusable: {e}")))?;

        if !matches {
            tracing::debug!(user_id = %user.user_id, "Login rejected: incorrect password");
            return Err(ApiAuthError::Unauthorized("incorrect password".to_string()));
        }

        let tokens = self.token_issuer.issue(user.user_id, &user.dormitory_id)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(AuthSession {
            user_id: user.user_id,
            dormitory_id: user.dormitory_id,
            tokens,
        })
    }

    /// Mint a new token pair for `user_id` in `dormitory_id`.
    ///
    /// Under [`RefreshPolicy::TrustHeaders`] the presented tokens are ignored.
    /// Under [`RefreshPolicy::VerifyRefreshToken`] the refresh token must be
    /// valid, of type `refresh`, and issued to `user_id`, and `dormitory_id`
    /// must be the stored dormitory of that user.
    ///
    /// The access token is never inspected.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::BadRequest` if `dormitory_id` is empty
    /// - `ApiAuthError::Unauthorized` if verification is on and fails
    /// - `ApiAuthError::Internal` on store or signing failure
    pub async fn refresh(
        &self,
        user_id: UserId,
        dormitory_id: &str,
        _access_token: &str,
        refresh_token: &str,
    ) -> Result<TokenPair, ApiAuthError> {
        require_non_empty("dormitory_id", dormitory_id)?;

        if self.refresh_policy == RefreshPolicy::VerifyRefreshToken {
            let claims = self
                .token_issuer
                .validate(refresh_token, TokenType::Refresh)?;

            if claims.user_id != user_id {
                tracing::warn!(
                    user_id = %user_id,
                    token_user_id = %claims.user_id,
                    "Refresh token subject mismatch"
                );
                return Err(ApiAuthError::Unauthorized(
                    "refresh token subject mismatch".to_string(),
                ));
            }

            let user = match self
                .repository
                .find_user_by_id(FindUserByIdRequest { user_id })
                .await
            {
                Ok(user) => user,
                Err(e) if e.is_not_found() => {
                    return Err(ApiAuthError::Unauthorized(
                        "refresh token subject unknown".to_string(),
                    ));
                }
                Err(e) => return Err(e.into()),
            };

            if user.dormitory_id != dormitory_id {
                tracing::warn!(
                    user_id = %user_id,
                    dormitory_id = %dormitory_id,
                    "Refresh requested for a foreign dormitory"
                );
                return Err(ApiAuthError::Unauthorized(
                    "dormitory does not match refresh token subject".to_string(),
                ));
            }
        }

        let tokens = self.token_issuer.issue(user_id, dormitory_id)?;

        tracing::info!(user_id = %user_id, dormitory_id = %dormitory_id, "Tokens refreshed");

        Ok(tokens)
    }

    /// Look up a user's current dormitory and role.
    ///
    /// # Errors
    ///
    /// - `ApiAuthError::NotFound` if no user has this id
    /// - `ApiAuthError::Internal` on store failure
    pub async fn user_info(&self, user_id: UserId) -> Result<UserInfo, ApiAuthError> {
        let user = self
            .repository
            .find_user_by_id(FindUserByIdRequest { user_id })
            .await?;

        Ok(UserInfo {
            user_id: user.user_id,
            dormitory_id: user.dormitory_id,
            role: user.role,
        })
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ApiAuthError> {
    if value.is_empty() {
        return Err(ApiAuthError::BadRequest(format!("{field} is required")));
    }
    Ok(())
}
