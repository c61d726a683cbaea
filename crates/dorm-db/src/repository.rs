//! Repository capability trait.

use async_trait::async_trait;

use crate::error::DbError;
use crate::models::{
    CreateUserRequest, CreateUserResponse, FindUserByEmailRequest, FindUserByIdRequest,
    UserRecord,
};

/// Durable store of user records.
///
/// Implementations own their concurrency discipline. Callers never retry.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user.
    ///
    /// Fails with `DbError::Conflict` if the email is already registered and
    /// `DbError::BadRequest` if a required field is empty.
    async fn create_user(&self, req: CreateUserRequest) -> Result<CreateUserResponse, DbError>;

    /// Find a user by exact email. Fails with `DbError::NotFound` if absent.
    async fn find_user_by_email(&self, req: FindUserByEmailRequest)
        -> Result<UserRecord, DbError>;

    /// Find a user by id. Fails with `DbError::NotFound` if absent.
    async fn find_user_by_id(&self, req: FindUserByIdRequest) -> Result<UserRecord, DbError>;
}
