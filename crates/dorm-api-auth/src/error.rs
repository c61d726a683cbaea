//! Error types for the authentication API.
//!
//! Every failure surfaced by [`AuthService`](crate::AuthService) is one of five
//! classes. Store errors are translated once, here, via `From<DbError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dorm_auth::AuthError;
use dorm_db::DbError;
use serde::{Deserialize, Serialize};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Generic label for the error class.
    pub error: String,
    /// Optional detail strings. Never populated for internal errors.
    #[serde(default)]
    pub details: Vec<String>,
}

/// Authentication API errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiAuthError {
    /// Malformed or missing input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No matching user.
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate email at registration.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Credential mismatch or rejected token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Store or signing failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiAuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Generic label safe to return to clients.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad request",
            Self::NotFound(_) => "not found",
            Self::Conflict(_) => "conflict",
            Self::Unauthorized(_) => "unauthorized",
            Self::Internal(_) => "internal server error",
        }
    }

    /// Detail strings exposed to clients.
    ///
    /// Only bad request and conflict errors carry details.
    pub fn client_details(&self) -> Vec<String> {
        match self {
            Self::BadRequest(detail) | Self::Conflict(detail) => vec![detail.clone()],
            Self::NotFound(_) | Self::Unauthorized(_) | Self::Internal(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl From<DbError> for ApiAuthError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::BadRequest(d) => Self::BadRequest(d),
            DbError::NotFound(d) => Self::NotFound(d),
            DbError::Conflict(d) => Self::Conflict(d),
            DbError::Internal(d) => Self::Internal(d),
        }
    }
}

impl From<AuthError> for ApiAuthError {
    fn from(err: AuthError) -> Self {
        if err.is_jwt_error() {
            Self::Unauthorized(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiAuthError {
    fn into_response(self) -> Response {
        if let Self::Internal(msg) = &self {
            tracing::error!(error = %msg, "Internal error");
        }

        let body = ErrorResponse {
            error: self.client_message().to_string(),
            details: self.client_details(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiAuthError::BadRequest("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiAuthError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiAuthError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiAuthError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiAuthError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_never_exposed() {
        let err = ApiAuthError::Internal("connection refused at 10.0.0.3".into());
        assert!(err.client_details().is_empty());
        assert_eq!(err.client_message(), "internal server error");
    }

    #[test]
    fn test_details_only_for_bad_request_and_conflict() {
        assert_eq!(
            ApiAuthError::Conflict("email taken".into()).client_details(),
            vec!["email taken".to_string()]
        );
        assert_eq!(
            ApiAuthError::BadRequest("email is empty".into()).client_details(),
            vec!["email is empty".to_string()]
        );
        assert!(ApiAuthError::NotFound("user".into()).client_details().is_empty());
        assert!(ApiAuthError::Unauthorized("incorrect password".into())
            .client_details()
            .is_empty());
    }

    #[test]
    fn test_db_error_translation() {
        assert_eq!(
            ApiAuthError::from(DbError::Conflict("dup".into())),
            ApiAuthError::Conflict("dup".into())
        );
        assert_eq!(
            ApiAuthError::from(DbError::Internal("io".into())),
            ApiAuthError::Internal("io".into())
        );
        assert!(ApiAuthError::from(DbError::NotFound("user".into())).is_not_found());
    }

    #[test]
    fn test_auth_error_translation() {
        assert!(ApiAuthError::from(AuthError::TokenExpired).is_unauthorized());
        assert!(ApiAuthError::from(AuthError::InvalidSignature).is_unauthorized());
        assert!(matches!(
            ApiAuthError::from(AuthError::InvalidKey("empty".into())),
            ApiAuthError::Internal(_)
        ));
        assert!(matches!(
            ApiAuthError::from(AuthError::HashingFailed("oom".into())),
            ApiAuthError::Internal(_)
        ));
    }
}
