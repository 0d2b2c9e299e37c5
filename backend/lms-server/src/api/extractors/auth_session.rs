//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use lms_core::Identity;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

/// Extracts the authenticated identity from the request.
///
/// With auth enabled, requires a `Bearer` session token issued by the
/// identity provider. With auth disabled (development mode), an `X-User-Id`
/// header may name the identity, else the configured dev user is assumed.
pub struct AuthSession(pub Identity);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(validator) = &state.jwt_validator else {
                return Ok(AuthSession(dev_identity(parts, state)));
            };

            let header_value = parts
                .headers
                .get(header::AUTHORIZATION)
                .ok_or_else(ApiError::unauthenticated)?;

            let header_str = header_value
                .to_str()
                .map_err(|_| ApiError::unauthenticated())?;

            let token = header_str
                .strip_prefix("Bearer ")
                .ok_or_else(ApiError::unauthenticated)?;

            let claims = validator.validate(token)?;
            let identity = claims.to_identity()?;

            Ok(AuthSession(identity))
        }
    }
}

/// Development-mode identity: `X-User-Id` header if present and well-formed,
/// else the configured dev user.
fn dev_identity(parts: &Parts, state: &AppState) -> Identity {
    #[allow(clippy::collapsible_if)]
    if let Some(header_value) = parts.headers.get("X-User-Id") {
        if let Ok(user_id_str) = header_value.to_str() {
            if let Ok(id) = Uuid::parse_str(user_id_str) {
                log::debug!("Using user ID from X-User-Id header: {}", id);
                return Identity::new(id, "dev@school.local");
            }
            log::warn!("Invalid UUID in X-User-Id header: {}", user_id_str);
        }
    }

    let id = Uuid::parse_str(&state.dev_user_id).unwrap_or_else(|_| Uuid::nil());
    log::debug!("Using configured dev user ID: {}", id);
    Identity::new(id, "dev@school.local")
}
