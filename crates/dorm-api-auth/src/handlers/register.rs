//! Registration endpoint handler.
//!
//! POST /auth/register - Create a student account and issue tokens.

use crate::error::ApiAuthError;
use crate::handlers::validated;
use crate::models::{RegisterRequest, SessionResponse};
use crate::services::AuthService;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use std::sync::Arc;

/// Handle user registration.
pub async fn register_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, ApiAuthError> {
    let request = validated(payload).inspect_err(|e| {
        tracing::warn!(handler = "register", error = %e, "Rejected request");
    })?;

    let session = auth_service
        .register(&request.email, &request.password, &request.dormitory_id)
        .await
        .inspect_err(|e| {
            tracing::error!(handler = "register", error = %e, "Registration failed");
        })?;

    Ok(Json(session.into()))
}
