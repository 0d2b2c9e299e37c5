use crate::{ApiError, AppState};

use lms_session::SessionId;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts the tracked session id from the `X-Session-Id` header.
pub struct SessionKey(pub SessionId);

impl FromRequestParts<AppState> for SessionKey {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value =
                parts
                    .headers
                    .get("X-Session-Id")
                    .ok_or_else(|| ApiError::Validation {
                        message: "Missing X-Session-Id header".to_string(),
                        field: Some("X-Session-Id".to_string()),
                        location: ErrorLocation::from(Location::caller()),
                    })?;

            let session_id = header_value
                .to_str()
                .ok()
                .and_then(SessionId::parse)
                .ok_or_else(|| ApiError::Validation {
                    message: "Malformed X-Session-Id header".to_string(),
                    field: Some("X-Session-Id".to_string()),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            Ok(SessionKey(session_id))
        }
    }
}
