use std::sync::Arc;

use ecogarden_weather::OpenWeatherService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: ecogarden_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// Weather lookups; owns the process-wide weather cache.
    pub weather: Arc<OpenWeatherService>,
}
