//! Stored user record and the typed repository requests/responses.

use chrono::{DateTime, Utc};
use dorm_core::{UserId, UserRole};
use serde::{Deserialize, Serialize};

/// A registered user as held by the repository.
///
/// `email` is unique across all records and compared case-sensitively.
/// `user_id` never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: UserId,
    pub email: String,
    /// PHC-formatted hash. Never the plaintext.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub dormitory_id: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// Request to create a user.
///
/// The caller generates `user_id`; the repository only enforces uniqueness.
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub user_id: UserId,
    pub email: String,
    pub password_hash: String,
    pub dormitory_id: String,
    pub role: UserRole,
}

impl CreateUserRequest {
    /// A student registration request with a freshly generated id.
    #[must_use]
    pub fn student(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        dormitory_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id: UserId::new(),
            email: email.into(),
            password_hash: password_hash.into(),
            dormitory_id: dormitory_id.into(),
            role: UserRole::Student,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserResponse {
    pub user_id: UserId,
    pub dormitory_id: String,
}

#[derive(Debug, Clone)]
pub struct FindUserByEmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Copy)]
pub struct FindUserByIdRequest {
    pub user_id: UserId,
}
