#![allow(dead_code)]

//! Test infrastructure for lms-db tests

use sqlx::SqlitePool;
use uuid::Uuid;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
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
