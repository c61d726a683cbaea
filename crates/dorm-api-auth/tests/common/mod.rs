//! Test helpers for dorm-api-auth integration tests.
//!
//! Builds the real router over an in-memory repository and drives it with
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use dorm_api_auth::{auth_router, AuthService, AuthState, JwtTokenIssuer, RefreshPolicy};
use dorm_auth::PasswordHasher;
use dorm_db::{
    CreateUserRequest, CreateUserResponse, DbError, FindUserByEmailRequest, FindUserByIdRequest,
    InMemoryUserRepository, UserRecord, UserRepository,
};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Build an auth service with cheap hashing over `repository`.
pub fn test_service(repository: Arc<dyn UserRepository>, policy: RefreshPolicy) -> AuthService {
    let issuer = Arc::new(JwtTokenIssuer::new(TEST_SECRET).expect("valid secret"));
    AuthService::new(repository, issuer)
        .with_password_hasher(PasswordHasher::with_params(4096, 1, 1).expect("valid params"))
        .with_refresh_policy(policy)
}

/// Router over a fresh in-memory repository.
pub fn test_app(policy: RefreshPolicy) -> (Router, Arc<InMemoryUserRepository>) {
    let repository = Arc::new(InMemoryUserRepository::new());
    let service = test_service(repository.clone(), policy);
    (auth_router(AuthState::new(Arc::new(service))), repository)
}

/// Router whose repository always fails with `err`.
pub fn failing_app(err: DbError) -> Router {
    let service = test_service(Arc::new(FailingRepository(err)), RefreshPolicy::default());
    auth_router(AuthState::new(Arc::new(service)))
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

pub async fn register(
    app: &Router,
    email: &str,
    password: &str,
    dormitory_id: &str,
) -> (StatusCode, Value) {
    let body = serde_json::json!({
        "email": email,
        "password": password,
        "dormitory_id": dormitory_id,
    });
    post_json(app, "/auth/register", &body.to_string(), &[]).await
}

pub async fn login(app: &Router, email: &str, password: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "email": email, "password": password });
    post_json(app, "/auth/login", &body.to_string(), &[]).await
}

/// Repository whose every call fails with the same error.
pub struct FailingRepository(pub DbError);

#[async_trait]
impl UserRepository for FailingRepository {
    async fn create_user(&self, _: CreateUserRequest) -> Result<CreateUserResponse, DbError> {
        Err(self.0.clone())
    }

    async fn find_user_by_email(&self, _: FindUserByEmailRequest) -> Result<UserRecord, DbError> {
        Err(self.0.clone())
    }

    async fn find_user_by_id(&self, _: FindUserByIdRequest) -> Result<UserRecord, DbError> {
        Err(self.0.clone())
    }
}
