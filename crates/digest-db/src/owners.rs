//! Database operations for the `owners` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

/// A row from the `owners` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OwnerRow {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Returns the owner with the given email, or `None` if not found.
///
/// Email comparison is case-insensitive; the stored casing is preserved.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn find_owner_by_email(pool: &PgPool, email: &str) -> Result<Option<OwnerRow>, DbError> {
    let row = sqlx::query_as::<_, OwnerRow>(
        "SELECT id, email, created_at \
         FROM owners \
         WHERE LOWER(email) = LOWER($1)",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
