//! Profile REST API handlers
//!
//! Read-only: profiles are provisioned out-of-band.

use crate::{ApiError, AppState, AuthSession, ProfileResponse, Result as ApiResult, require_role};

use lms_core::{Profile, Role};
use lms_db::ProfileRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /api/v1/me
///
/// The caller's own profile. An identity without a profile row resolves to
/// the lowest-privilege default, mirroring the access guard
pub async fn get_me(
    State(state): State<AppState>,
    AuthSession(identity): AuthSession,
) -> ApiResult<Json<ProfileResponse>> {
    let repo = ProfileRepository::new(state.pool.clone());
    let profile = repo
        .find_by_id(identity.id)
        .await?
        .unwrap_or_else(|| Profile::new(identity.id, Role::Student));

    Ok(Json(ProfileResponse {
        profile: profile.into(),
    }))
}

/// GET /api/v1/profiles/:id
///
/// Another user's profile; requires the teacher role (admin overrides)
pub async fn get_profile(
    State(state): State<AppState>,
    AuthSession(identity): AuthSession,
    Path(id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    require_role(&state, &identity, Role::Teacher).await?;

    let profile_id = Uuid::parse_str(&id)?;

    let repo = ProfileRepository::new(state.pool.clone());
    let profile = repo
        .find_by_id(profile_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Profile {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(ProfileResponse {
        profile: profile.into(),
    }))
}
