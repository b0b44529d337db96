//! Repository for the `likes` table.
//!
//! The (user, content) pair invariant is enforced by the
//! `uq_likes_user_content` unique index, not by check-then-insert code, so
//! concurrent requests racing on the same pair cannot create two edges.

use inkstream_core::reactions::LikeKind;
use inkstream_core::types::DbId;
use sqlx::PgPool;

use crate::models::like::Like;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, content_id, kind, created_at";

/// Provides edge operations for likes.
pub struct LikeRepo;

impl LikeRepo {
    /// Insert a like edge unless one already exists for the (user, content)
    /// pair. A single atomic statement: `None` means the pair was already
    /// present, regardless of the kind it was stored with.
    pub async fn add(
        pool: &PgPool,
        user_id: DbId,
        content_id: DbId,
        kind: LikeKind,
    ) -> Result<Option<Like>, sqlx::Error> {
        let query = format!(
            "INSERT INTO likes (user_id, content_id, kind)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, content_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Like>(&query)
            .bind(user_id)
            .bind(content_id)
            .bind(kind)
            .fetch_optional(pool)
            .await
    }

    /// Number of like edges for a content item, derived at read time.
    pub async fn count(pool: &PgPool, content_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE content_id = $1")
            .bind(content_id)
            .fetch_one(pool)
            .await
    }

    /// Whether the user has a like edge for the content item.
    pub async fn exists(
        pool: &PgPool,
        user_id: DbId,
        content_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM likes WHERE user_id = $1 AND content_id = $2)",
        )
        .bind(user_id)
        .bind(content_id)
        .fetch_one(pool)
        .await
    }

    /// Remove every like edge for a content item. Called by the surrounding
    /// content-deletion flow; returns the number of edges removed.
    pub async fn delete_for_content(pool: &PgPool, content_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM likes WHERE content_id = $1")
            .bind(content_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
