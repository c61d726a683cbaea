//! Request DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// Registration request payload.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    /// Length cap keeps hashing cost bounded.
    #[validate(length(min = 1, max = 1024, message = "password must be 1-1024 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "dormitory_id is required"))]
    pub dormitory_id: String,
}

/// Login request payload.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Token refresh request payload.
///
/// Identity comes from the `X-User-ID` and `X-Dormitory-ID` headers; the
/// tokens in the body are only inspected when refresh verification is on.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

// Passwords and tokens stay out of Debug output so they never reach the logs.
impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("dormitory_id", &self.dormitory_id)
            .finish()
    }
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl std::fmt::Debug for RefreshRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshRequest")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

/// Flatten validation errors into one message, ordered by field name.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(_, errors)| {
            errors
                .iter()
                .filter_map(|e| e.message.as_ref().map(std::string::ToString::to_string))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(email: &str, password: &str, dormitory_id: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            dormitory_id: dormitory_id.to_string(),
        }
    }

    #[test]
    fn test_register_request_validation() {
        assert!(register("a@b.com", "pw123456", "D1").validate().is_ok());

        let err = register("", "pw123456", "D1").validate().unwrap_err();
        assert_eq!(validation_message(&err), "email is required");

        let err = register("a@b.com", "pw123456", "").validate().unwrap_err();
        assert_eq!(validation_message(&err), "dormitory_id is required");
    }

    #[test]
    fn test_password_length_bounds() {
        assert!(register("a@b.com", &"x".repeat(1024), "D1").validate().is_ok());
        assert!(register("a@b.com", &"x".repeat(1025), "D1").validate().is_err());
        assert!(register("a@b.com", "", "D1").validate().is_err());
    }

    #[test]
    fn test_validation_message_is_ordered() {
        let err = register("", "", "").validate().unwrap_err();
        assert_eq!(
            validation_message(&err),
            "dormitory_id is required, email is required, password must be 1-1024 characters"
        );
    }

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "a@b.com".to_string(),
            password: "any".to_string(),
        };
        assert!(valid.validate().is_ok());

        let long = LoginRequest {
            email: "a@b.com".to_string(),
            password: "x".repeat(4096),
        };
        assert!(long.validate().is_ok());

        let empty = LoginRequest {
            email: "a@b.com".to_string(),
            password: String::new(),
        };
        let err = empty.validate().unwrap_err();
        assert_eq!(validation_message(&err), "password is required");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let req = register("a@b.com", "pw123456", "D1");
        let debug = format!("{req:?}");
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("pw123456"));

        let refresh = RefreshRequest {
            access_token: "aaa.bbb.ccc".to_string(),
            refresh_token: "ddd.eee.fff".to_string(),
        };
        assert!(!format!("{refresh:?}").contains("ddd.eee.fff"));
    }

    #[test]
    fn test_refresh_request_fields_default() {
        let req: RefreshRequest = serde_json::from_str("{}").unwrap();
        assert!(req.access_token.is_empty());
        assert!(req.refresh_token.is_empty());
    }
}
