use axum::routing::{post, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// POST   /       -> create_user
/// PUT    /{id}   -> update_user (admin)
/// DELETE /{id}   -> delete_user (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(user::create_user))
        .route("/{id}", put(user::update_user).delete(user::delete_user))
}
