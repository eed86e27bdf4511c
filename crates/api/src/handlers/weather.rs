//! Handlers for the `/weather` resource.

use axum::extract::{Path, State};
use axum::Json;
use ecogarden_core::error::CoreError;
use ecogarden_db::repositories::UserRepo;
use ecogarden_weather::WeatherSummary;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireUser;
use crate::state::AppState;

const USER_CITY_NOT_FOUND: &str =
    "The user's city is missing or unknown to the weather provider";

/// GET /api/weather
///
/// Weather for the authenticated user's stored city.
pub async fn weather_for_me(
    State(state): State<AppState>,
    RequireUser(auth): RequireUser,
) -> AppResult<Json<WeatherSummary>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    state
        .weather
        .get_weather_for_user(&user)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(USER_CITY_NOT_FOUND.into()))
}

/// GET /api/weather/{city}
pub async fn weather_for_city(
    State(state): State<AppState>,
    RequireUser(_user): RequireUser,
    Path(city): Path<String>,
) -> AppResult<Json<WeatherSummary>> {
    state
        .weather
        .get_weather_for_city(&city)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("City \"{}\" not found", city.trim())))
}
