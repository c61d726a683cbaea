//! Arena-backed in-memory repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use dorm_core::{UserId, UserRole};

use crate::error::DbError;
use crate::models::{
    CreateUserRequest, CreateUserResponse, FindUserByEmailRequest, FindUserByIdRequest,
    UserRecord,
};
use crate::repository::UserRepository;

#[derive(Debug, Default)]
struct Arena {
    records: Vec<UserRecord>,
    by_id: HashMap<UserId, usize>,
    by_email: HashMap<String, usize>,
}

/// In-memory implementation of `UserRepository`.
///
/// Records live in a single vector; both indexes point into it and are
/// updated under the same write lock, so email uniqueness holds under
/// concurrent registration.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    arena: RwLock<Arena>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.arena
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .records
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Change a user's role.
    ///
    /// # Errors
    ///
    /// Returns `DbError::NotFound` if no user has `user_id`.
    pub fn set_role(&self, user_id: UserId, role: UserRole) -> Result<(), DbError> {
        let mut arena = self.arena.write().unwrap_or_else(|e| e.into_inner());
        let idx = *arena
            .by_id
            .get(&user_id)
            .ok_or_else(|| DbError::NotFound(format!("user {user_id}")))?;
        arena.records[idx].role = role;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, req: CreateUserRequest) -> Result<CreateUserResponse, DbError> {
        if req.email.is_empty() {
            return Err(DbError::BadRequest("email is empty".to_string()));
        }
        if req.password_hash.is_empty() {
            return Err(DbError::BadRequest("password hash is empty".to_string()));
        }
        if req.dormitory_id.is_empty() {
            return Err(DbError::BadRequest("dormitory id is empty".to_string()));
        }

        let mut arena = self.arena.write().unwrap_or_else(|e| e.into_inner());

        if arena.by_email.contains_key(&req.email) {
            return Err(DbError::Conflict(format!(
                "user with email {} already exists",
                req.email
            )));
        }
        if arena.by_id.contains_key(&req.user_id) {
            return Err(DbError::Conflict(format!(
                "user with id {} already exists",
                req.user_id
            )));
        }

        let idx = arena.records.len();
        arena.by_id.insert(req.user_id, idx);
        arena.by_email.insert(req.email.clone(), idx);
        arena.records.push(UserRecord {
            user_id: req.user_id,
            email: req.email,
            password_hash: req.password_hash,
            dormitory_id: req.dormitory_id.clone(),
            role: req.role,
            created_at: Utc::now(),
        });

        tracing::debug!(user_id = %req.user_id, "User record created");

        Ok(CreateUserResponse {
            user_id: req.user_id,
            dormitory_id: req.dormitory_id,
        })
    }

    async fn find_user_by_email(
        &self,
        req: FindUserByEmailRequest,
    ) -> Result<UserRecord, DbError> {
        if req.email.is_empty() {
            return Err(DbError::BadRequest("email is empty".to_string()));
        }

        let arena = self.arena.read().unwrap_or_else(|e| e.into_inner());
        arena
            .by_email
            .get(&req.email)
            .map(|&idx| arena.records[idx].clone())
            .ok_or_else(|| DbError::NotFound("user not found".to_string()))
    }

    async fn find_user_by_id(&self, req: FindUserByIdRequest) -> Result<UserRecord, DbError> {
        let arena = self.arena.read().unwrap_or_else(|e| e.into_inner());
        arena
            .by_id
            .get(&req.user_id)
            .map(|&idx| arena.records[idx].clone())
            .ok_or_else(|| DbError::NotFound("user not found".to_string()))
    }
}
