//! Handlers for the `/like` resource.
//!
//! A user holds at most one like per content item, whatever the reaction
//! kind. Duplicate likes answer 200 with an informational message rather
//! than an error, so double-submitting clients are not punished.

use std::str::FromStr;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use inkstream_core::error::CoreError;
use inkstream_core::reactions::LikeKind;
use inkstream_core::types::DbId;
use inkstream_db::models::like::Like;
use inkstream_db::repositories::LikeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /like/{content_id}/like`.
#[derive(Debug, Deserialize)]
pub struct AddLikeRequest {
    /// Reaction kind; parsed against the closed [`LikeKind`] set.
    pub kind: String,
}

/// Payload returned by `GET /like/{content_id}/like-count`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCount {
    pub like_count: i64,
}

/// Payload returned by `GET /like/{content_id}/has-liked`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HasLiked {
    pub has_liked: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/like/{content_id}/like
///
/// Liking twice is not an error: the second call answers 200 with an
/// informational message and leaves exactly one edge in place.
pub async fn add_like(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(content_id): Path<DbId>,
    Json(input): Json<AddLikeRequest>,
) -> AppResult<impl IntoResponse> {
    let kind = LikeKind::from_str(&input.kind)
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid like type".into())))?;

    match LikeRepo::add(&state.pool, user.id, content_id, kind).await? {
        Some(like) => {
            tracing::info!(user_id = user.id, content_id, kind = %kind, "Content liked");
            Ok(ApiResponse::ok(like, "Blog post liked successfully"))
        }
        None => Ok(ApiResponse::<Like>::message(
            "You have already liked this blog post",
        )),
    }
}

/// GET /api/like/{content_id}/like-count
///
/// Public; the count is derived from the like edges.
pub async fn like_count(
    State(state): State<AppState>,
    Path(content_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let like_count = LikeRepo::count(&state.pool, content_id).await?;

    Ok(ApiResponse::ok(
        LikeCount { like_count },
        "Like count fetched successfully",
    ))
}

/// GET /api/like/{content_id}/has-liked
pub async fn has_liked(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(content_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let has_liked = LikeRepo::exists(&state.pool, user.id, content_id).await?;

    let message = if has_liked {
        "You have liked this blog post"
    } else {
        "You have not liked this blog post"
    };

    Ok(ApiResponse::ok(HasLiked { has_liked }, message))
}
