//! HTTP-level tests for account registration and admin user management.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, post_json, put_json_auth};
use ecogarden_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_creates_plain_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "email": " lea@ecogarden.fr ",
        "password": "carottes-42",
        "city": " Bordeaux ",
    });
    let response = post_json(app, "/api/user", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "lea@ecogarden.fr");
    assert_eq!(json["city"], "Bordeaux");
    assert_eq!(json["roles"], serde_json::json!(["ROLE_USER"]));
    assert!(json.get("password_hash").is_none());
    assert!(json.get("password").is_none());

    let stored = UserRepo::find_by_email(&pool, "lea@ecogarden.fr")
        .await
        .unwrap()
        .expect("user should be stored");
    assert!(stored.password_hash.starts_with("$argon2id$"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email_conflicts(pool: PgPool) {
    common::create_user(&pool, "lea@ecogarden.fr", "Bordeaux", false).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "lea@ecogarden.fr",
        "password": "carottes-42",
        "city": "Lille",
    });
    let response = post_json(app, "/api/user", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_rejects_invalid_input(pool: PgPool) {
    let cases = [
        serde_json::json!({ "email": "lea@ecogarden.fr", "password": "carottes-42" }),
        serde_json::json!({ "email": "lea@ecogarden.fr", "city": "Lille" }),
        serde_json::json!({ "email": "", "password": "carottes-42", "city": "Lille" }),
        serde_json::json!({ "email": "not-an-email", "password": "carottes-42", "city": "Lille" }),
        serde_json::json!({ "email": "lea@ecogarden.fr", "password": "short", "city": "Lille" }),
    ];

    for body in cases {
        let response = post_json(common::build_test_app(pool.clone()), "/api/user", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

// ---------------------------------------------------------------------------
// Admin update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_updates_city_only(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let user = common::create_user(&pool, "lea@ecogarden.fr", "Bordeaux", false).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "city": "Marseille" });
    let response = put_json_auth(app, &format!("/api/user/{}", user.id), body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["city"], "Marseille");
    assert_eq!(json["email"], "lea@ecogarden.fr");
    assert!(json["updated_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_update_rejects_blank_and_taken_email(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let user = common::create_user(&pool, "lea@ecogarden.fr", "Bordeaux", false).await;
    let uri = format!("/api/user/{}", user.id);

    let body = serde_json::json!({ "city": "  " });
    let response = put_json_auth(common::build_test_app(pool.clone()), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = serde_json::json!({ "email": "admin@ecogarden.fr" });
    let response = put_json_auth(common::build_test_app(pool.clone()), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Keeping one's own email is not a conflict.
    let body = serde_json::json!({ "email": "lea@ecogarden.fr" });
    let response = put_json_auth(common::build_test_app(pool), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_requires_admin(pool: PgPool) {
    let token = common::user_token(&pool).await;
    let other = common::create_user(&pool, "lea@ecogarden.fr", "Bordeaux", false).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "city": "Marseille" });
    let response = put_json_auth(app, &format!("/api/user/{}", other.id), body, &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_unknown_user_is_404(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "city": "Marseille" });
    let response = put_json_auth(app, "/api/user/999999", body, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_unknown_user_wins_over_invalid_body(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "not-an-email", "city": "  " });
    let response = put_json_auth(app, "/api/user/999999", body, &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Admin delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_deletes_user(pool: PgPool) {
    let token = common::admin_token(&pool).await;
    let user = common::create_user(&pool, "lea@ecogarden.fr", "Bordeaux", false).await;
    let uri = format!("/api/user/{}", user.id);

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(common::build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    assert!(UserRepo::find_by_id(&pool, user.id).await.unwrap().is_none());
}
