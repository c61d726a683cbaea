//! Access policy for dormitory-scoped resources.
//!
//! The policy is a pure function of the subject lookup result and the
//! request. It performs no I/O; callers fetch the subject first and pass the
//! outcome in.
//!
//! ```rust
//! use dorm_authorization::{evaluate, AccessRequest, SubjectInfo};
//! use dorm_core::{UserId, UserRole};
//!
//! let subject = SubjectInfo {
//!     user_id: UserId::new(),
//!     dormitory_id: "D1".to_string(),
//!     role: UserRole::Admin,
//! };
//! let request = AccessRequest::new(subject.user_id.to_string(), "D2", false);
//!
//! let decision = evaluate(Ok(&subject), &request);
//! assert!(!decision.allowed);
//! ```

mod policy;
mod types;

pub use policy::{
    evaluate, REASON_ALLOWED, REASON_CROSS_DORMITORY, REASON_USER_NOT_FOUND,
};
pub use types::{AccessDecision, AccessRequest, DecisionSource, LookupFailure, SubjectInfo};
