//! HTTP-level integration tests for the follow endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, get, get_auth, post_json_auth};
use inkstream_api::auth::jwt::generate_token;
use inkstream_api::auth::password::hash_password;
use inkstream_db::models::user::{CreateUser, User};
use inkstream_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test user and a valid token for them.
async fn create_user_with_token(pool: &PgPool, username: &str) -> (User, String) {
    let hashed = hash_password("test_password_123!").expect("hashing should succeed");
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    let token =
        generate_token(user.id, &common::test_config().jwt).expect("token generation should succeed");
    (user, token)
}

/// Follow `followee_id` as the owner of `token`, returning the response.
async fn follow(
    app: &Router,
    token: &str,
    followee_id: i64,
) -> axum::http::Response<axum::body::Body> {
    let body = serde_json::json!({ "followeeId": followee_id });
    post_json_auth(app, "/api/follow", body, token).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Follow, duplicate follow, unfollow, duplicate unfollow -- the full cycle.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_follow_unfollow_cycle(pool: PgPool) {
    let (alice, _alice_token) = create_user_with_token(&pool, "alice").await;
    let (_bob, bob_token) = create_user_with_token(&pool, "bob").await;
    let app = common::build_test_app(pool);

    // bob follows alice.
    let response = follow(&app, &bob_token, alice.id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Successfully followed the user");

    // Following again is a no-op answered with 200.
    let response = follow(&app, &bob_token, alice.id).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "You are already following this user");

    // Unfollow removes the edge.
    let body = serde_json::json!({ "followeeId": alice.id });
    let response = post_json_auth(&app, "/api/follow/unfollow", body, &bob_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Successfully unfollowed the user");

    // Unfollowing a missing edge is 404.
    let body = serde_json::json!({ "followeeId": alice.id });
    let response = post_json_auth(&app, "/api/follow/unfollow", body, &bob_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "You are not following this user");
}

/// Following yourself is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_self_follow_rejected(pool: PgPool) {
    let (alice, alice_token) = create_user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let response = follow(&app, &alice_token, alice.id).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "You cannot follow yourself");
}

/// Following a nonexistent user is 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_follow_unknown_user(pool: PgPool) {
    let (_alice, alice_token) = create_user_with_token(&pool, "alice").await;
    let app = common::build_test_app(pool);

    let response = follow(&app, &alice_token, 424242).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// is-following transitions with the edge lifecycle.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_is_following_transitions(pool: PgPool) {
    let (alice, _alice_token) = create_user_with_token(&pool, "alice").await;
    let (_bob, bob_token) = create_user_with_token(&pool, "bob").await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/follow/is-following/{}", alice.id);

    let response = get_auth(&app, &uri, &bob_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["isFollowing"], false);

    let response = follow(&app, &bob_token, alice.id).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(&app, &uri, &bob_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["isFollowing"], true);
}

/// The public relation listing carries counterpart identities both ways.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_followers_lists_relations(pool: PgPool) {
    let (alice, _alice_token) = create_user_with_token(&pool, "alice").await;
    let (_bob, bob_token) = create_user_with_token(&pool, "bob").await;
    let app = common::build_test_app(pool);

    let response = follow(&app, &bob_token, alice.id).await;
    assert_eq!(response.status(), StatusCode::OK);

    // alice's followers contain bob.
    let response = get(&app, "/api/follow/getFollowers/alice").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["followers"][0]["username"], "bob");
    assert_eq!(json["data"]["following"], serde_json::json!([]));

    // bob's following contains alice.
    let response = get(&app, "/api/follow/getFollowers/bob").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["following"][0]["username"], "alice");
    assert_eq!(json["data"]["followers"], serde_json::json!([]));
}

/// Relation listings for unknown users answer 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_followers_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/api/follow/getFollowers/ghost").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Follow endpoints require authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_follow_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/follow")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::json!({ "followeeId": 1 }).to_string(),
        ))
        .expect("request should build");
    let response = tower::util::ServiceExt::oneshot(app, request)
        .await
        .expect("request should run");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
