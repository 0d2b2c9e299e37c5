use crate::{AccessDecision, Role};

#[test]
fn test_allow_has_no_reason() {
    let decision = AccessDecision::allow();
    assert!(decision.allowed);
    assert!(decision.reason.is_none());
}

#[test]
fn test_unauthenticated_reason() {
    let decision = AccessDecision::deny_unauthenticated();
    assert!(!decision.allowed);
    assert_eq!(decision.reason.as_deref(), Some("authentication required"));
}

#[test]
fn test_lookup_failed_reason() {
    let decision = AccessDecision::deny_lookup_failed();
    assert!(!decision.allowed);
    assert_eq!(decision.reason.as_deref(), Some("access check failed"));
}

#[test]
fn test_insufficient_role_names_both_roles() {
    let decision = AccessDecision::deny_insufficient_role(Role::Admin, Role::Teacher);
    assert!(!decision.allowed);
    assert_eq!(
        decision.reason.as_deref(),
        Some("required role: admin, current role: teacher")
    );
}
