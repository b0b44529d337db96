//! Handlers for the `/follow` resource.
//!
//! The authenticated user is always the follower; request bodies carry the
//! followee. Following twice answers 200 with an informational message;
//! unfollowing a relationship that does not exist is a 404.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use inkstream_core::error::CoreError;
use inkstream_core::types::DbId;
use inkstream_db::models::follow::RelationEntry;
use inkstream_db::repositories::{FollowRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /follow` and `POST /follow/unfollow`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub followee_id: DbId,
}

/// Payload returned by `GET /follow/is-following/{followee_id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsFollowing {
    pub is_following: bool,
}

/// Payload returned by `GET /follow/getFollowers/{username}`.
#[derive(Debug, Serialize)]
pub struct Relations {
    pub followers: Vec<RelationEntry>,
    pub following: Vec<RelationEntry>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/follow
///
/// Follow another user. Self-follows are rejected; following the same user
/// twice is a no-op answered with 200.
pub async fn follow(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(input): Json<FollowRequest>,
) -> AppResult<impl IntoResponse> {
    if input.followee_id == user.id {
        return Err(AppError::Core(CoreError::Validation(
            "You cannot follow yourself".into(),
        )));
    }

    if UserRepo::find_public_by_id(&state.pool, input.followee_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound("User not found".into())));
    }

    match FollowRepo::add(&state.pool, user.id, input.followee_id).await? {
        Some(_) => {
            tracing::info!(
                follower_id = user.id,
                followee_id = input.followee_id,
                "Follow edge created"
            );
            Ok(ApiResponse::<serde_json::Value>::message(
                "Successfully followed the user",
            ))
        }
        None => Ok(ApiResponse::message("You are already following this user")),
    }
}

/// POST /api/follow/unfollow
pub async fn unfollow(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(input): Json<FollowRequest>,
) -> AppResult<impl IntoResponse> {
    let removed = FollowRepo::remove(&state.pool, user.id, input.followee_id).await?;

    if !removed {
        return Err(AppError::Core(CoreError::NotFound(
            "You are not following this user".into(),
        )));
    }

    tracing::info!(
        follower_id = user.id,
        followee_id = input.followee_id,
        "Follow edge removed"
    );

    Ok(ApiResponse::<serde_json::Value>::message(
        "Successfully unfollowed the user",
    ))
}

/// GET /api/follow/is-following/{followee_id}
pub async fn is_following(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(followee_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let is_following = FollowRepo::exists(&state.pool, user.id, followee_id).await?;

    Ok(ApiResponse::ok(
        IsFollowing { is_following },
        "Follow status fetched successfully",
    ))
}

/// GET /api/follow/getFollowers/{username}
///
/// Public; both relation lists for a user, with counterpart identities
/// populated from the users table.
pub async fn get_followers(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_public_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("User not found".into())))?;

    let followers = FollowRepo::followers_of(&state.pool, user.id).await?;
    let following = FollowRepo::following_of(&state.pool, user.id).await?;

    Ok(ApiResponse::ok(
        Relations {
            followers,
            following,
        },
        "Follow relations fetched successfully",
    ))
}
