//! Token refresh endpoint handler.
//!
//! POST /auth/refresh - Issue a new token pair for the identity carried in
//! the `X-User-ID` and `X-Dormitory-ID` headers.

use crate::error::ApiAuthError;
use crate::models::{RefreshRequest, TokenResponse};
use crate::services::AuthService;
use axum::extract::rejection::JsonRejection;
use axum::http::HeaderMap;
use axum::{Extension, Json};
use dorm_core::UserId;
use std::sync::Arc;

pub const USER_ID_HEADER: &str = "X-User-ID";
pub const DORMITORY_ID_HEADER: &str = "X-Dormitory-ID";

/// Handle token refresh.
///
/// Headers are checked before the body is decoded.
pub async fn refresh_handler(
    Extension(auth_service): Extension<Arc<AuthService>>,
    headers: HeaderMap,
    payload: Result<Json<RefreshRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiAuthError> {
    let (user_id, dormitory_id) = identity_from_headers(&headers).inspect_err(|e| {
        tracing::warn!(handler = "refresh", error = %e, "Rejected request");
    })?;

    let Json(request) = payload.map_err(|e| {
        tracing::warn!(handler = "refresh", error = %e, "Error decoding request");
        ApiAuthError::BadRequest(e.body_text())
    })?;

    let tokens = auth_service
        .refresh(
            user_id,
            &dormitory_id,
            &request.access_token,
            &request.refresh_token,
        )
        .await
        .inspect_err(|e| {
            if e.is_unauthorized() {
                tracing::warn!(handler = "refresh", error = %e, "Refresh rejected");
            } else {
                tracing::error!(handler = "refresh", error = %e, "Refresh failed");
            }
        })?;

    Ok(Json(tokens.into()))
}

fn identity_from_headers(headers: &HeaderMap) -> Result<(UserId, String), ApiAuthError> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let (Some(user_id), Some(dormitory_id)) = (header(USER_ID_HEADER), header(DORMITORY_ID_HEADER))
    else {
        return Err(ApiAuthError::BadRequest("Missing user data".to_string()));
    };

    let user_id = user_id
        .parse::<UserId>()
        .map_err(|_| ApiAuthError::BadRequest("invalid user id".to_string()))?;

    Ok((user_id, dormitory_id.to_string()))
}
