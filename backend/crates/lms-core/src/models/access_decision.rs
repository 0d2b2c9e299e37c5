use crate::Role;

use serde::Serialize;

/// Outcome of an access check. Computed per evaluation, never persisted,
/// never cached across identity or requirement changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessDecision {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AccessDecision {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    /// No identity present.
    pub fn deny_unauthenticated() -> Self {
        Self {
            allowed: false,
            reason: Some("authentication required".to_string()),
        }
    }

    /// Role lookup failed transiently. Fail closed.
    pub fn deny_lookup_failed() -> Self {
        Self {
            allowed: false,
            reason: Some("access check failed".to_string()),
        }
    }

    /// Identity present but role insufficient.
    pub fn deny_insufficient_role(required: Role, actual: Role) -> Self {
        Self {
            allowed: false,
            reason: Some(format!(
                "required role: {required}, current role: {actual}"
            )),
        }
    }
}
