//! Repository for the `follows` table.
//!
//! The (follower, followee) pair invariant is enforced by the
//! `uq_follows_follower_followee` unique index; self-follows are additionally
//! rejected by a CHECK constraint as a storage-level backstop to the
//! handler's validation.

use inkstream_core::types::DbId;
use sqlx::PgPool;

use crate::models::follow::{Follow, RelationEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, follower_id, followee_id, created_at";

/// Provides edge operations for follow relationships.
pub struct FollowRepo;

impl FollowRepo {
    /// Insert a follow edge unless one already exists for the pair.
    /// A single atomic statement: `None` means already following.
    pub async fn add(
        pool: &PgPool,
        follower_id: DbId,
        followee_id: DbId,
    ) -> Result<Option<Follow>, sqlx::Error> {
        let query = format!(
            "INSERT INTO follows (follower_id, followee_id)
             VALUES ($1, $2)
             ON CONFLICT (follower_id, followee_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Follow>(&query)
            .bind(follower_id)
            .bind(followee_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete the matching follow edge. Returns `false` when no edge existed.
    pub async fn remove(
        pool: &PgPool,
        follower_id: DbId,
        followee_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND followee_id = $2")
                .bind(follower_id)
                .bind(followee_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether a follow edge exists for the pair.
    pub async fn exists(
        pool: &PgPool,
        follower_id: DbId,
        followee_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM follows WHERE follower_id = $1 AND followee_id = $2)",
        )
        .bind(follower_id)
        .bind(followee_id)
        .fetch_one(pool)
        .await
    }

    /// Users following `user_id`, most recent first, with the counterpart
    /// identity populated from `users`.
    pub async fn followers_of(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<RelationEntry>, sqlx::Error> {
        sqlx::query_as::<_, RelationEntry>(
            "SELECT u.id, u.username, u.display_name
             FROM follows f
             JOIN users u ON u.id = f.follower_id
             WHERE f.followee_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Users `user_id` follows, most recent first, with the counterpart
    /// identity populated from `users`.
    pub async fn following_of(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<RelationEntry>, sqlx::Error> {
        sqlx::query_as::<_, RelationEntry>(
            "SELECT u.id, u.username, u.display_name
             FROM follows f
             JOIN users u ON u.id = f.followee_id
             WHERE f.follower_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
