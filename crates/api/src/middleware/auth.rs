//! Authenticated-user extractor for Axum handlers.
//!
//! Implements the per-request pipeline: extract a bearer token from the
//! `Authorization` header (falling back to the `token` cookie), verify it,
//! load the referenced user, and attach it to the request. Every failure
//! short-circuits with a 401 envelope before the handler runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use inkstream_core::error::CoreError;
use inkstream_db::models::user::PublicUser;
use inkstream_db::repositories::UserRepo;

use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::state::AppState;

/// Cookie that mirrors the Authorization header for browser clients.
pub const TOKEN_COOKIE: &str = "token";

/// Authenticated user loaded from the database for the current request.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(AuthUser(user): AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser(pub PublicUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Not authorized, no token".into()))
        })?;

        let user_id = verify_token(&token, &state.config.jwt).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Not authorized, token failed".into()))
        })?;

        // The token may outlive its account; a missing row is an auth
        // failure, not a server error.
        let user = UserRepo::find_public_by_id(&state.pool, user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Not authorized, user no longer exists".into(),
                ))
            })?;

        Ok(AuthUser(user))
    }
}

/// Token from the `Authorization: Bearer <token>` header, or from the
/// `token` cookie when the header is absent.
fn bearer_token(parts: &Parts) -> Option<String> {
    let from_header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(ToOwned::to_owned);

    from_header.or_else(|| {
        CookieJar::from_headers(&parts.headers)
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
    })
}
