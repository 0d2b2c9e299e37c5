#![allow(dead_code)]

//! Test infrastructure for lms-server API tests

use lms_auth::{AccessGuard, Claims, JwtValidator};
use lms_db::ProfileRepository;
use lms_server::AppState;
use lms_session::{InactivityConfig, LocalSignOut, SessionLimits, SessionRegistry};

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/lms-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing, with HS256 auth enabled
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    app_state_with(pool, true).await
}

/// Create AppState for testing in development mode (auth disabled)
pub async fn create_dev_app_state() -> AppState {
    let pool = create_test_pool().await;
    app_state_with(pool, false).await
}

pub async fn app_state_with(pool: SqlitePool, auth_enabled: bool) -> AppState {
    let jwt_validator =
        auth_enabled.then(|| Arc::new(JwtValidator::with_hs256(TEST_JWT_SECRET)));

    let profiles = Arc::new(ProfileRepository::new(pool.clone()));
    let guard = Arc::new(AccessGuard::new(profiles));

    let sessions = SessionRegistry::new(
        SessionLimits::default(),
        InactivityConfig::default(),
        Arc::new(|_| true),
        Arc::new(LocalSignOut),
    );

    AppState {
        pool,
        jwt_validator,
        dev_user_id: "00000000-0000-0000-0000-000000000001".to_string(),
        guard,
        sessions,
    }
}

/// Seed a profile row
pub async fn seed_profile(pool: &SqlitePool, id: Uuid, role: &str, full_name: Option<&str>) {
    sqlx::query("INSERT INTO lms_profiles (id, role, full_name) VALUES (?, ?, ?)")
        .bind(id.to_string())
        .bind(role)
        .bind(full_name)
        .execute(pool)
        .await
        .expect("Failed to seed profile");
}

/// Mint a session token for `user_id`, signed with the test secret
pub fn bearer_token_for(user_id: Uuid) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        email: format!("{user_id}@school.example"),
        name: None,
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .unwrap()
}
