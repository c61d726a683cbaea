//! Request, subject and decision types for the access policy.

use dorm_core::{UserId, UserRole};
use serde::{Deserialize, Serialize};

/// "May this subject act in this dormitory, at this privilege level?"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    /// Subject id as presented by the caller. Not yet validated.
    pub user_id: String,
    /// Dormitory the caller wants to act in.
    pub dormitory_id: String,
    /// Whether the `admin` role is required.
    pub role_required: bool,
}

impl AccessRequest {
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        dormitory_id: impl Into<String>,
        role_required: bool,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            dormitory_id: dormitory_id.into(),
            role_required,
        }
    }
}

/// The subject's current scope and role, as read from the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInfo {
    pub user_id: UserId,
    pub dormitory_id: String,
    pub role: UserRole,
}

/// Why the subject could not be looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    NotFound,
    /// Any other failure, carrying the error's display text.
    Failed(String),
}

/// Which rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionSource {
    SubjectNotFound,
    LookupFailed,
    CrossDormitory,
    InsufficientRole,
    Allowed,
}

/// Outcome of an access check. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    pub allowed: bool,
    pub reason: String,
    /// The subject's actual role, or the failure marker when the lookup failed.
    pub subject_role: String,
    pub source: DecisionSource,
}

impl AccessDecision {
    pub(crate) fn deny(
        source: DecisionSource,
        reason: impl Into<String>,
        subject_role: impl Into<String>,
    ) -> Self {
        Self {
            allowed: false,
            reason: reason.into(),
            subject_role: subject_role.into(),
            source,
        }
    }
}
