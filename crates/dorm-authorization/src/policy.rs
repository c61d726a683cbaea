//! The access decision rules.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//! 1. Subject not found: deny.
//! 2. Subject lookup failed otherwise: deny with the error text.
//! 3. Requested dormitory differs from the subject's: deny.
//! 4. Admin required and subject is not admin: deny.
//! 5. Allow.
//!
//! Rule 3 precedes rule 4, so an admin of one dormitory is never let into
//! another.

use crate::types::{AccessDecision, AccessRequest, DecisionSource, LookupFailure, SubjectInfo};

pub const REASON_USER_NOT_FOUND: &str = "user not found";
pub const REASON_CROSS_DORMITORY: &str = "cross-dormitory access denied";
pub const REASON_ALLOWED: &str = "allowed";

/// Decide whether `request` is allowed given the subject lookup outcome.
#[must_use]
pub fn evaluate(
    subject: Result<&SubjectInfo, &LookupFailure>,
    request: &AccessRequest,
) -> AccessDecision {
    let subject = match subject {
        Ok(subject) => subject,
        Err(LookupFailure::NotFound) => {
            return AccessDecision::deny(
                DecisionSource::SubjectNotFound,
                REASON_USER_NOT_FOUND,
                REASON_USER_NOT_FOUND,
            );
        }
        Err(LookupFailure::Failed(text)) => {
            return AccessDecision::deny(DecisionSource::LookupFailed, text.as_str(), text.as_str());
        }
    };

    let role = subject.role.as_str();

    if request.dormitory_id != subject.dormitory_id {
        return AccessDecision::deny(DecisionSource::CrossDormitory, REASON_CROSS_DORMITORY, role);
    }

    if request.role_required && !subject.role.is_admin() {
        return AccessDecision::deny(
            DecisionSource::InsufficientRole,
            format!("insufficient role: user role is '{role}', required 'admin'"),
            role,
        );
    }

    AccessDecision {
        allowed: true,
        reason: REASON_ALLOWED.to_string(),
        subject_role: role.to_string(),
        source: DecisionSource::Allowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dorm_core::{UserId, UserRole};

    fn subject(dormitory_id: &str, role: UserRole) -> SubjectInfo {
        SubjectInfo {
            user_id: UserId::new(),
            dormitory_id: dormitory_id.to_string(),
            role,
        }
    }

    fn request_for(subject: &SubjectInfo, dormitory_id: &str, role_required: bool) -> AccessRequest {
        AccessRequest::new(subject.user_id.to_string(), dormitory_id, role_required)
    }

    #[test]
    fn test_not_found_marks_reason_and_role() {
        let request = AccessRequest::new(UserId::new().to_string(), "D1", false);
        let decision = evaluate(Err(&LookupFailure::NotFound), &request);

        assert!(!decision.allowed);
        assert_eq!(decision.reason, "user not found");
        assert_eq!(decision.subject_role, "user not found");
        assert_eq!(decision.source, DecisionSource::SubjectNotFound);
    }

    #[test]
    fn test_lookup_failure_carries_error_text() {
        let request = AccessRequest::new(UserId::new().to_string(), "D1", true);
        let failure = LookupFailure::Failed("store unavailable".to_string());
        let decision = evaluate(Err(&failure), &request);

        assert!(!decision.allowed);
        assert_eq!(decision.reason, "store unavailable");
        assert_eq!(decision.subject_role, "store unavailable");
    }

    #[test]
    fn test_cross_dormitory_denied_for_every_role() {
        for role in [UserRole::Student, UserRole::Admin] {
            let subject = subject("A", role);
            for role_required in [false, true] {
                let decision = evaluate(Ok(&subject), &request_for(&subject, "B", role_required));
                assert!(!decision.allowed);
                assert_eq!(decision.reason, REASON_CROSS_DORMITORY);
                assert_eq!(decision.subject_role, role.as_str());
            }
        }
    }

    #[test]
    fn test_tenant_check_precedes_role_check() {
        let student = subject("A", UserRole::Student);
        let decision = evaluate(Ok(&student), &request_for(&student, "B", true));
        assert_eq!(decision.source, DecisionSource::CrossDormitory);
    }

    #[test]
    fn test_student_role_gate() {
        let student = subject("D1", UserRole::Student);

        let denied = evaluate(Ok(&student), &request_for(&student, "D1", true));
        assert!(!denied.allowed);
        assert!(denied.reason.contains("insufficient role"));
        assert_eq!(denied.subject_role, "student");

        let allowed = evaluate(Ok(&student), &request_for(&student, "D1", false));
        assert!(allowed.allowed);
        assert_eq!(allowed.reason, REASON_ALLOWED);
        assert_eq!(allowed.subject_role, "student");
    }

    #[test]
    fn test_admin_allowed_in_own_dormitory() {
        let admin = subject("D1", UserRole::Admin);
        let decision = evaluate(Ok(&admin), &request_for(&admin, "D1", true));

        assert!(decision.allowed);
        assert_eq!(decision.subject_role, "admin");
        assert_eq!(decision.source, DecisionSource::Allowed);
    }

    #[test]
    fn test_dormitory_comparison_is_exact() {
        let student = subject("D1", UserRole::Student);
        let decision = evaluate(Ok(&student), &request_for(&student, "d1", false));
        assert!(!decision.allowed);
    }

    #[test]
    fn test_decision_serializes_source() {
        let student = subject("D1", UserRole::Student);
        let decision = evaluate(Ok(&student), &request_for(&student, "D1", false));
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["source"], "allowed");
        assert_eq!(json["allowed"], true);
    }
}
