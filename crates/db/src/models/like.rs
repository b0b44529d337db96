//! Like edge model.

use inkstream_core::reactions::LikeKind;
use inkstream_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A like edge row from the `likes` table.
///
/// `content_id` is a weak reference: content lives outside this service's
/// ownership and no foreign key is enforced on it.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: DbId,
    pub user_id: DbId,
    pub content_id: DbId,
    pub kind: LikeKind,
    pub created_at: Timestamp,
}
