use std::time::Duration;

/// Default OpenWeatherMap "current weather" endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
/// Lifetime of a cached summary (10 minutes).
pub const CACHE_TTL_SECS: u64 = 600;
/// Default upstream request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Default maximum number of cached cities.
const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Configuration for the upstream weather provider and the lookup cache.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// Provider API key, sent as `appid`.
    pub api_key: String,
    /// Endpoint queried with `GET ?q=<city>`.
    pub base_url: String,
    /// Upstream request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum number of cities kept in memory.
    pub cache_capacity: u64,
}

impl WeatherConfig {
    /// Load weather configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default                 |
    /// |--------------------------|----------|-------------------------|
    /// | `WEATHER_API_KEY`        | **yes**  | --                      |
    /// | `WEATHER_BASE_URL`       | no       | [`DEFAULT_BASE_URL`]    |
    /// | `WEATHER_TIMEOUT_SECS`   | no       | `10`                    |
    /// | `WEATHER_CACHE_CAPACITY` | no       | `10000`                 |
    ///
    /// # Panics
    ///
    /// Panics if `WEATHER_API_KEY` is not set or a numeric variable does not parse.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("WEATHER_API_KEY").expect("WEATHER_API_KEY must be set in the environment");

        let base_url =
            std::env::var("WEATHER_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs: u64 = std::env::var("WEATHER_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("WEATHER_TIMEOUT_SECS must be a valid u64");

        let cache_capacity: u64 = std::env::var("WEATHER_CACHE_CAPACITY")
            .unwrap_or_else(|_| DEFAULT_CACHE_CAPACITY.to_string())
            .parse()
            .expect("WEATHER_CACHE_CAPACITY must be a valid u64");

        Self {
            api_key,
            base_url,
            timeout_secs,
            cache_capacity,
        }
    }

    /// Configuration pointing at `base_url` with every other value defaulted.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Lifetime of a cached summary. Not configurable.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(CACHE_TTL_SECS)
    }
}
