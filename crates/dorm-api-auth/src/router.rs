//! Authentication API router configuration.
//!
//! Configures routes for the authentication endpoints:
//! - GET /auth/ping
//! - POST /auth/register
//! - POST /auth/login
//! - POST /auth/refresh

use crate::handlers::{login_handler, ping_handler, refresh_handler, register_handler};
use crate::services::AuthService;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Default cap on request body size.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared state for the authentication routes.
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: Arc<AuthService>,
    pub max_body_bytes: usize,
}

impl AuthState {
    #[must_use]
    pub fn new(auth_service: Arc<AuthService>) -> Self {
        Self {
            auth_service,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    #[must_use]
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

/// Create the authentication router, mounted under `/auth`.
pub fn auth_router(state: AuthState) -> Router {
    let routes = Router::new()
        .route("/ping", get(ping_handler))
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/refresh", post(refresh_handler))
        .layer(Extension(state.auth_service));

    Router::new()
        .nest("/auth", routes)
        .layer(RequestBodyLimitLayer::new(state.max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
