//! User entity model and DTOs.

use inkstream_core::roles::Role;
use inkstream_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses.
/// Use [`PublicUser`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
///
/// Selected straight from the table via
/// [`UserRepo::find_public_by_id`](crate::repositories::UserRepo), so the
/// credential hash never leaves the database for these reads.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user. Role defaults to `user` in the schema.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// DTO for profile updates. All fields are required by the update endpoint.
#[derive(Debug)]
pub struct UpdateProfile {
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
}
