pub mod auth;
pub mod follow;
pub mod health;
pub mod like;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/logout                         logout (public)
/// /auth/is-login/{token}               session check (public)
/// /auth/profile/{username}             public profile
/// /auth/update-profile                 profile update (requires auth)
/// /auth/admin/users                    user listing (admin only)
///
/// /like/{content_id}/like              add like (requires auth)
/// /like/{content_id}/like-count        like count (public)
/// /like/{content_id}/has-liked         like check (requires auth)
///
/// /follow                              follow (requires auth)
/// /follow/unfollow                     unfollow (requires auth)
/// /follow/is-following/{followee_id}   follow check (requires auth)
/// /follow/getFollowers/{username}      relation lists (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/like", like::router())
        .nest("/follow", follow::router())
}
