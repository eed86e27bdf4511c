pub mod auth;
pub mod health;
pub mod tip;
pub mod user;
pub mod weather;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth                 login (public)
///
/// /user                 register (public)
/// /user/{id}            update, delete (admin only)
///
/// /tips                 current month (auth), create (admin)
/// /tips/{id}            by month number (auth), update, delete (admin)
///
/// /weather              weather for the caller's city (auth)
/// /weather/{city}       weather for any city (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/user", user::router())
        .nest("/tips", tip::router())
        .nest("/weather", weather::router())
}
