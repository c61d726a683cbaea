//! Login endpoint handler.
//!
//! POST /auth/login - Authenticate user and issue tokens.

use crate::error::ApiAuthError;
use crate::handlers::validated;
use crate::models::{LoginRequest, SessionResponse};
use crate::services::AuthService;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use std::sync::Arc;

/// Handle user login.
///
/// Unknown email and wrong password produce the same 401 response.
pub async fn login_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, ApiAuthError> {
    let request = validated(payload).inspect_err(|e| {
        tracing::warn!(handler = "login", error = %e, "Rejected request");
    })?;

    let session = auth_service
        .login(&request.email, &request.password)
        .await
        .map_err(|e| {
            if e.is_not_found() || e.is_unauthorized() {
                tracing::warn!(handler = "login", error = %e, "Login rejected");
                ApiAuthError::Unauthorized("invalid credentials".to_string())
            } else {
                tracing::error!(handler = "login", error = %e, "Login failed");
                e
            }
        })?;

    Ok(Json(session.into()))
}
