//! Role-based access control.
//!
//! [`authorize`] is the single place a user's role is compared against a
//! route's allowed-role set. The wrapper extractor applies it at the type
//! level so route signatures document their own requirements.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use inkstream_core::error::CoreError;
use inkstream_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Check a role against the allowed set for a route.
pub fn authorize(role: Role, allowed: &[Role]) -> Result<(), CoreError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Forbidden("User role is not authorized".into()))
    }
}

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        authorize(user.0.role, &[Role::Admin])?;
        Ok(RequireAdmin(user))
    }
}
