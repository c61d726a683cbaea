//! HTTP handlers for the authentication endpoints.

mod login;
mod ping;
mod refresh;
mod register;

pub use login::login_handler;
pub use ping::ping_handler;
pub use refresh::{refresh_handler, DORMITORY_ID_HEADER, USER_ID_HEADER};
pub use register::register_handler;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use validator::Validate;

use crate::error::ApiAuthError;
use crate::models::validation_message;

/// Unwrap a JSON body, turning decode and validation failures into
/// `BadRequest` with the reason as detail.
pub(crate) fn validated<T: Validate>(
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiAuthError> {
    let Json(request) = payload.map_err(|e| ApiAuthError::BadRequest(e.body_text()))?;
    request
        .validate()
        .map_err(|e| ApiAuthError::BadRequest(validation_message(&e)))?;
    Ok(request)
}
