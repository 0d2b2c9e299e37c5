use lms_auth::{AccessGuard, JwtValidator};
use lms_session::SessionRegistry;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// None = auth disabled (development mode)
    pub jwt_validator: Option<Arc<JwtValidator>>,
    /// Identity substituted for requests when auth is disabled
    pub dev_user_id: String,
    pub guard: Arc<AccessGuard>,
    pub sessions: SessionRegistry,
}
