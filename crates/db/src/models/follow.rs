//! Follow edge model and relation views.

use inkstream_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A follow edge row from the `follows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    pub id: DbId,
    pub follower_id: DbId,
    pub followee_id: DbId,
    pub created_at: Timestamp,
}

/// Counterpart identity in a follower/following listing, joined from `users`
/// at read time.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationEntry {
    pub id: DbId,
    pub username: String,
    pub display_name: Option<String>,
}
