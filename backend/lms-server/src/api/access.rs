use crate::{ApiError, AppState, Result as ApiResult};

use lms_core::{Identity, Role};

use std::panic::Location;

use error_location::ErrorLocation;

/// Check the caller's role against a requirement via the access guard.
///
/// Returns Ok(()) if authorized. Every denial with an identity present is a
/// 403 - including a transient lookup failure, which denies fail-closed with
/// its own wording rather than guessing a role.
pub async fn require_role(
    state: &AppState,
    identity: &Identity,
    required: Role,
) -> ApiResult<()> {
    let decision = state.guard.evaluate(Some(identity), Some(required)).await;

    if decision.allowed {
        return Ok(());
    }

    Err(ApiError::Forbidden {
        message: decision
            .reason
            .unwrap_or_else(|| "access denied".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
