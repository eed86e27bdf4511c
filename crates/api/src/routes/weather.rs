use axum::routing::get;
use axum::Router;

use crate::handlers::weather;
use crate::state::AppState;

/// Routes mounted at `/weather`.
///
/// ```text
/// GET /         -> weather_for_me
/// GET /{city}   -> weather_for_city
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(weather::weather_for_me))
        .route("/{city}", get(weather::weather_for_city))
}
