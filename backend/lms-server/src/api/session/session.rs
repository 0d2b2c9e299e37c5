//! Session lifecycle REST API handlers
//!
//! Sessions are registered after sign-in, pinged with activity while the
//! user works, and cleared on sign-out or inactivity expiry.

use crate::{
    ActivityResponse, ApiError, AppState, AuthSession, Result as ApiResult, SessionKey,
    SessionResponse, SignOutResponse,
};

use lms_core::Identity;
use lms_session::{SessionError, SessionId, SessionInfo};

use std::panic::Location;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

/// POST /api/v1/session
///
/// Track the authenticated session; arms its inactivity monitor when the
/// session policy applies
pub async fn create_session(
    State(state): State<AppState>,
    AuthSession(identity): AuthSession,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let session_id = state
        .sessions
        .register(identity)
        .await
        .map_err(|e| match e {
            SessionError::SessionLimitExceeded { current, max, .. } => {
                ApiError::ServiceUnavailable {
                    message: format!("Session capacity reached ({current}/{max})"),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            other => ApiError::Internal {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        })?;

    let info = owned_session(&state, session_id, None).await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session: info.into(),
        }),
    ))
}

/// GET /api/v1/session
///
/// Current session snapshot: identity and monitor state
pub async fn get_session(
    State(state): State<AppState>,
    AuthSession(identity): AuthSession,
    SessionKey(session_id): SessionKey,
) -> ApiResult<Json<SessionResponse>> {
    let info = owned_session(&state, session_id, Some(&identity)).await?;

    Ok(Json(SessionResponse {
        session: info.into(),
    }))
}

/// POST /api/v1/session/activity
///
/// Qualifying user activity; resets the inactivity clock (debounced)
pub async fn record_activity(
    State(state): State<AppState>,
    AuthSession(identity): AuthSession,
    SessionKey(session_id): SessionKey,
) -> ApiResult<Json<ActivityResponse>> {
    owned_session(&state, session_id, Some(&identity)).await?;

    let acknowledged = state.sessions.touch(session_id).await;

    Ok(Json(ActivityResponse { acknowledged }))
}

/// POST /api/v1/session/sign-out
///
/// Clear the session. Local state is cleared even when the identity
/// provider cannot be reached; the response reports the provider outcome
pub async fn sign_out(
    State(state): State<AppState>,
    AuthSession(identity): AuthSession,
    SessionKey(session_id): SessionKey,
) -> ApiResult<Json<SignOutResponse>> {
    owned_session(&state, session_id, Some(&identity)).await?;

    let provider_ack = state
        .sessions
        .sign_out(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    Ok(Json(SignOutResponse {
        signed_out: true,
        provider_ack,
    }))
}

/// Look up a tracked session, optionally verifying it belongs to the caller.
async fn owned_session(
    state: &AppState,
    session_id: SessionId,
    caller: Option<&Identity>,
) -> ApiResult<SessionInfo> {
    let info = state
        .sessions
        .info(session_id)
        .await
        .ok_or_else(|| session_not_found(session_id))?;

    if let Some(caller) = caller
        && info.identity.id != caller.id
    {
        return Err(ApiError::Forbidden {
            message: "session does not belong to the caller".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(info)
}

#[track_caller]
fn session_not_found(session_id: SessionId) -> ApiError {
    ApiError::NotFound {
        message: format!("Session {} not found", session_id),
        location: ErrorLocation::from(Location::caller()),
    }
}
