use crate::api::profiles::profiles::{get_me, get_profile};
use crate::api::session::session::{create_session, get_session, record_activity, sign_out};
use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Session lifecycle
        .route("/api/v1/session", post(create_session).get(get_session))
        .route("/api/v1/session/activity", post(record_activity))
        .route("/api/v1/session/sign-out", post(sign_out))
        // Profiles
        .route("/api/v1/me", get(get_me))
        .route("/api/v1/profiles/{id}", get(get_profile))
        // Add shared state
        .with_state(state)
        // CORS middleware (the web client runs on a different origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
