use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Component status overview
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = if state.pool.is_closed() {
        "unavailable"
    } else {
        "operational"
    };

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "auth": if state.jwt_validator.is_some() { "enabled" } else { "disabled" },
            "sessions": state.sessions.total_count().await,
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Kubernetes liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    // Simple check: if we can respond, we're alive
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Kubernetes readiness probe (ready to accept traffic?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.pool.is_closed() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}
