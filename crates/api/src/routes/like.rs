//! Route definitions for the `/like` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::like;
use crate::state::AppState;

/// Routes mounted at `/like`.
///
/// ```text
/// POST /{content_id}/like        -> add_like (requires auth)
/// GET  /{content_id}/like-count  -> like_count
/// GET  /{content_id}/has-liked   -> has_liked (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{content_id}/like", post(like::add_like))
        .route("/{content_id}/like-count", get(like::like_count))
        .route("/{content_id}/has-liked", get(like::has_liked))
}
