//! Repository for the `users` table.

use inkstream_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, PublicUser, UpdateProfile, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, role, \
                        display_name, bio, avatar_url, created_at, updated_at";

/// Column list excluding the credential hash, for rows that reach clients.
const PUBLIC_COLUMNS: &str = "id, username, email, role, \
                               display_name, bio, avatar_url, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID, credential hash included.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive), credential hash included.
    ///
    /// This is the login lookup; everything else should prefer the
    /// `find_public_*` variants.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive), credential hash included.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by internal ID without selecting the credential hash.
    pub async fn find_public_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PublicUser>, sqlx::Error> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, PublicUser>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username without selecting the credential hash.
    pub async fn find_public_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<PublicUser>, sqlx::Error> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, PublicUser>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by most recently created first.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<PublicUser>, sqlx::Error> {
        let query = format!("SELECT {PUBLIC_COLUMNS} FROM users ORDER BY created_at DESC");
        sqlx::query_as::<_, PublicUser>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a user's profile fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<PublicUser>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                display_name = $2,
                bio = $3,
                avatar_url = $4
             WHERE id = $1
             RETURNING {PUBLIC_COLUMNS}"
        );
        sqlx::query_as::<_, PublicUser>(&query)
            .bind(id)
            .bind(&input.display_name)
            .bind(&input.bio)
            .bind(&input.avatar_url)
            .fetch_optional(pool)
            .await
    }
}
