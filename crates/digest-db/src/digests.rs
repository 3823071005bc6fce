//! Database operations for the `digests` table.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `digests` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DigestRow {
    pub id: i64,
    pub owner_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Whether an upsert created a new row or replaced an existing body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

impl UpsertOutcome {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
        }
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert a digest for `(owner_id, title)`, or replace its body if one exists.
///
/// Runs as a single atomic `INSERT ... ON CONFLICT DO UPDATE` against the
/// unique `(owner_id, title)` constraint, so there is no read-then-write race
/// window. `xmax = 0` distinguishes a fresh insert from a conflict update.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the statement fails.
pub async fn upsert_digest(
    pool: &PgPool,
    owner_id: Uuid,
    title: &str,
    body: &str,
) -> Result<UpsertOutcome, DbError> {
    let inserted: bool = sqlx::query_scalar(
        "INSERT INTO digests (owner_id, title, body) \
         VALUES ($1, $2, $3) \
         ON CONFLICT (owner_id, title) \
         DO UPDATE SET body = EXCLUDED.body, updated_at = NOW() \
         RETURNING (xmax = 0)",
    )
    .bind(owner_id)
    .bind(title)
    .bind(body)
    .fetch_one(pool)
    .await?;

    Ok(if inserted {
        UpsertOutcome::Inserted
    } else {
        UpsertOutcome::Updated
    })
}

/// List an owner's digests, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_digests(
    pool: &PgPool,
    owner_id: Uuid,
    limit: i64,
) -> Result<Vec<DigestRow>, DbError> {
    let rows = sqlx::query_as::<_, DigestRow>(
        "SELECT id, owner_id, title, body, created_at, updated_at \
         FROM digests \
         WHERE owner_id = $1 \
         ORDER BY created_at DESC, id DESC \
         LIMIT $2",
    )
    .bind(owner_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
