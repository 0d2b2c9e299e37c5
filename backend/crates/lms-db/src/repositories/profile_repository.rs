use crate::{DbError, Result as DbErrorResult};

use lms_auth::{LookupError, ProfileStore};
use lms_core::{Profile, Role};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Single-row read of {id, role, full_name} by identity id.
    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Profile>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, role, full_name
                FROM lms_profiles
                WHERE id = ?
                "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| parse_profile(&r)).transpose()
    }
}

#[track_caller]
fn parse_profile(row: &SqliteRow) -> DbErrorResult<Profile> {
    let id: String = row.try_get("id")?;
    let role: String = row.try_get("role")?;
    let full_name: Option<String> = row.try_get("full_name")?;

    Ok(Profile {
        id: Uuid::parse_str(&id).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid UUID in profile.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        role: Role::from_str(&role).map_err(|_| DbError::CorruptRow {
            message: format!("Unknown role in profile.role: {role}"),
            location: ErrorLocation::from(Location::caller()),
        })?,
        full_name,
    })
}

// Any database failure is a transient lookup error to the guard: it denies
// (fail closed) rather than guessing a role. Only a genuinely missing row
// maps to Ok(None).
#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn fetch_profile(&self, id: Uuid) -> Result<Option<Profile>, LookupError> {
        self.find_by_id(id)
            .await
            .map_err(|e| LookupError::transient(e.to_string()))
    }
}
