//! Route definitions for the `/follow` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::follow;
use crate::state::AppState;

/// Routes mounted at `/follow`.
///
/// ```text
/// POST /                            -> follow (requires auth)
/// POST /unfollow                    -> unfollow (requires auth)
/// GET  /is-following/{followee_id}  -> is_following (requires auth)
/// GET  /getFollowers/{username}     -> get_followers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(follow::follow))
        .route("/unfollow", post(follow::unfollow))
        .route("/is-following/{followee_id}", get(follow::is_following))
        .route("/getFollowers/{username}", get(follow::get_followers))
}
