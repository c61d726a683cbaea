//! Error types for the dorm-db crate.

use thiserror::Error;

/// Classified repository errors.
///
/// Every storage backend reports failures through one of these four classes.
/// The auth core translates them once, at its boundary.
///
/// # Example
///
/// ```rust
/// use dorm_db::DbError;
///
/// fn describe(err: &DbError) -> &'static str {
///     match err {
///         DbError::BadRequest(_) => "bad input",
///         DbError::NotFound(_) => "missing",
///         DbError::Conflict(_) => "duplicate",
///         DbError::Internal(_) => "store failure",
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DbError {
    /// The request was malformed (empty or nil input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No record matches the lookup.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A uniqueness constraint was violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other storage failure.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl DbError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound(_))
    }
}
