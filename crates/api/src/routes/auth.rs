//! Route definitions for the `/auth` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /register            -> register
/// POST /login               -> login
/// GET  /logout              -> logout
/// POST /is-login/{token}    -> is_logged_in
/// GET  /profile/{username}  -> profile
/// PUT  /update-profile      -> update_profile (requires auth)
/// GET  /admin/users         -> list_users (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/is-login/{token}", post(auth::is_logged_in))
        .route("/profile/{username}", get(auth::profile))
        .route("/update-profile", put(auth::update_profile))
        .route("/admin/users", get(auth::list_users))
}
