#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use ecogarden_api::auth::jwt::{generate_access_token, JwtConfig};
use ecogarden_api::auth::password::hash_password;
use ecogarden_api::config::ServerConfig;
use ecogarden_api::router::build_app_router;
use ecogarden_api::state::AppState;
use ecogarden_core::roles::{ROLE_ADMIN, ROLE_USER};
use ecogarden_db::models::user::{CreateUser, User};
use ecogarden_db::repositories::{RoleRepo, UserRepo};
use ecogarden_weather::{MemoryStore, OpenWeatherClient, WeatherConfig, WeatherService};

/// Plaintext password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "potager-2024";

/// Nothing listens here, so weather lookups fail fast with a connection error.
const UNREACHABLE_WEATHER_URL: &str = "http://127.0.0.1:9/weather";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(weather_base_url: &str) -> ServerConfig {
    let mut weather = WeatherConfig::with_base_url("test-key", weather_base_url);
    weather.timeout_secs = 2;

    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            expiry_mins: 60,
        },
        weather,
    }
}

/// Build the full application router against `pool`, with an unreachable
/// weather provider.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_weather(pool, UNREACHABLE_WEATHER_URL)
}

/// Build the full application router with the weather provider at `base_url`.
///
/// Uses [`build_app_router`] so tests exercise the production middleware stack.
pub fn build_test_app_with_weather(pool: PgPool, base_url: &str) -> Router {
    let config = test_config(base_url);
    let provider = OpenWeatherClient::new(&config.weather).expect("client should build");
    let weather = WeatherService::new(
        provider,
        MemoryStore::new(config.weather.cache_capacity),
        Duration::from_secs(600),
    );

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        weather: Arc::new(weather),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user with [`TEST_PASSWORD`] directly through the repository.
pub async fn create_user(pool: &PgPool, email: &str, city: &str, admin: bool) -> User {
    let mut roles = vec![ROLE_USER.to_string()];
    if admin {
        roles.push(ROLE_ADMIN.to_string());
    }
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        city: city.to_string(),
        roles,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Sign an access token for `user` with its current effective roles.
pub async fn token_for(pool: &PgPool, user: &User) -> String {
    let roles = RoleRepo::effective_for_user(pool, user.id)
        .await
        .expect("roles should load");
    generate_access_token(user.id, &user.email, &roles, &test_config(UNREACHABLE_WEATHER_URL).jwt)
        .expect("token generation should succeed")
}

/// Create an admin and return its token.
pub async fn admin_token(pool: &PgPool) -> String {
    let admin = create_user(pool, "admin@ecogarden.fr", "Paris", true).await;
    token_for(pool, &admin).await
}

/// Create a regular user and return its token.
pub async fn user_token(pool: &PgPool) -> String {
    let user = create_user(pool, "jardinier@ecogarden.fr", "Lyon", false).await;
    token_for(pool, &user).await
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes()
        .to_vec()
}

