//! Route definitions for the `/tips` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tip;
use crate::state::AppState;

/// Routes mounted at `/tips`.
///
/// The `{id}` segment is a month number for `GET` and a tip id for the
/// write methods.
///
/// ```text
/// GET    /       -> list_current
/// POST   /       -> create_tip (admin)
/// GET    /{id}   -> list_for_month
/// PUT    /{id}   -> update_tip (admin)
/// DELETE /{id}   -> delete_tip (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tip::list_current).post(tip::create_tip))
        .route(
            "/{id}",
            get(tip::list_for_month)
                .put(tip::update_tip)
                .delete(tip::delete_tip),
        )
}
