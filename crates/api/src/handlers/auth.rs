//! Handlers for the `/auth` resource: registration, login/logout, profiles,
//! and the admin user listing.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use validator::Validate;

use inkstream_core::error::CoreError;
use inkstream_core::types::{DbId, Timestamp};
use inkstream_db::models::follow::RelationEntry;
use inkstream_db::models::user::{CreateUser, PublicUser, UpdateProfile};
use inkstream_db::repositories::{FollowRepo, UserRepo};

use crate::auth::jwt::{generate_token, verify_token};
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, TOKEN_COOKIE};
use crate::middleware::rbac::RequireAdmin;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 30, message = "Username must be 3-30 characters"))]
    pub username: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    pub password: String,
}

/// Payload returned by `POST /auth/register`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    pub password: String,
}

/// Payload returned by `POST /auth/login`. The token is also set as the
/// `token` cookie on the same response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Payload returned by `POST /auth/is-login/{token}`.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub user: PublicUser,
}

/// Request body for `PUT /auth/update-profile`. All fields are required.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 60, message = "Display name must be 1-60 characters"))]
    pub display_name: String,
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: String,
    #[validate(length(max = 2000, message = "Avatar URL is too long"))]
    pub avatar_url: String,
}

/// Payload returned by `GET /auth/profile/{username}`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: PublicUser,
    pub followers: Vec<RelationEntry>,
    pub following: Vec<RelationEntry>,
}

/// Payload returned by `GET /auth/admin/users`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserList {
    pub users: Vec<PublicUser>,
    pub total_users: usize,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create a new account with the default `user` role.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(CoreError::Validation)?;

    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Validation(
            "Email already exists".into(),
        )));
    }

    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Validation(
            "Username already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(ApiResponse::created(
        RegisteredUser {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        },
        "User account created successfully",
    ))
}

/// POST /api/auth/login
///
/// Authenticate by email + password. On success the token is returned in the
/// body and mirrored into the `token` cookie. An unknown email and a wrong
/// password are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let Some(user) = UserRepo::find_by_email(&state.pool, &input.email).await? else {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    let jar = jar.add(auth_cookie(token.clone(), state.config.cookie_secure));

    Ok((
        jar,
        ApiResponse::ok(
            LoggedInUser {
                id: user.id,
                username: user.username,
                email: user.email,
                token,
            },
            "User logged in successfully",
        ),
    ))
}

/// GET /api/auth/logout
///
/// Clears the `token` cookie. The token value itself stays valid until its
/// expiry; there is no server-side revocation list.
pub async fn logout(jar: CookieJar) -> AppResult<impl IntoResponse> {
    let jar = jar.remove(Cookie::build((TOKEN_COOKIE, "")).path("/").build());

    Ok((
        jar,
        ApiResponse::<serde_json::Value>::message("User logged out successfully"),
    ))
}

/// POST /api/auth/is-login/{token}
///
/// Lets the SPA check a stored token on boot. Answers 401 for an invalid or
/// expired token, and for a token whose account no longer exists.
pub async fn is_logged_in(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<impl IntoResponse> {
    let Some(user_id) = verify_token(&token, &state.config.jwt) else {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid or expired token. Please login again.".into(),
        )));
    };

    let Some(user) = UserRepo::find_public_by_id(&state.pool, user_id).await? else {
        return Err(AppError::Core(CoreError::Unauthorized(
            "User not found. Please login again.".into(),
        )));
    };

    Ok(ApiResponse::ok(SessionUser { user }, "User is logged in"))
}

/// GET /api/auth/profile/{username}
///
/// Public profile with follower/following lists derived from the follow
/// edges at read time.
pub async fn profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_public_by_username(&state.pool, &username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound("User not found".into())))?;

    let followers = FollowRepo::followers_of(&state.pool, user.id).await?;
    let following = FollowRepo::following_of(&state.pool, user.id).await?;

    Ok(ApiResponse::ok(
        ProfileResponse {
            user,
            followers,
            following,
        },
        "User profile fetched successfully",
    ))
}

/// PUT /api/auth/update-profile
pub async fn update_profile(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let updated = UserRepo::update_profile(
        &state.pool,
        user.id,
        &UpdateProfile {
            display_name: input.display_name,
            bio: input.bio,
            avatar_url: input.avatar_url,
        },
    )
    .await?
    .ok_or_else(|| AppError::Core(CoreError::NotFound("User not found".into())))?;

    Ok(ApiResponse::ok(updated, "User profile updated successfully"))
}

/// GET /api/auth/admin/users
///
/// Admin only.
pub async fn list_users(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_public(&state.pool).await?;

    tracing::debug!(
        admin_id = admin.0.id,
        total = users.len(),
        "Admin listed users"
    );

    let total_users = users.len();
    Ok(ApiResponse::ok(
        UserList { users, total_users },
        "All users fetched successfully",
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the auth cookie carrying the freshly minted token.
///
/// Cross-origin browser clients need `SameSite=None`; that combination
/// requires `Secure` outside local development, controlled by configuration.
fn auth_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::None)
        .path("/")
        .build()
}
