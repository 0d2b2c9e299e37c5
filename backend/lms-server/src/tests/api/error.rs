use crate::ApiError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

#[test]
fn given_unauthenticated_error_then_401() {
    let response = ApiError::unauthenticated().into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn given_forbidden_error_then_403() {
    let response = ApiError::Forbidden {
        message: "required role: admin, current role: teacher".to_string(),
        location: location(),
    }
    .into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[test]
fn given_not_found_error_then_404() {
    let response = ApiError::NotFound {
        message: "Profile x not found".to_string(),
        location: location(),
    }
    .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn given_validation_error_then_400() {
    let response = ApiError::Validation {
        message: "Missing X-Session-Id header".to_string(),
        field: Some("X-Session-Id".to_string()),
        location: location(),
    }
    .into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn given_service_unavailable_error_then_503() {
    let response = ApiError::ServiceUnavailable {
        message: "Session capacity reached (1/1)".to_string(),
        location: location(),
    }
    .into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn given_auth_error_then_converted_to_unauthenticated() {
    let auth_error = lms_auth::AuthError::MissingHeader {
        location: location(),
    };

    let api_error = ApiError::from(auth_error);

    assert!(matches!(api_error, ApiError::Unauthenticated { .. }));
    let response = api_error.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn given_uuid_error_then_converted_to_validation() {
    let uuid_error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();

    let api_error = ApiError::from(uuid_error);

    let response = api_error.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
