/// Errors from the upstream weather provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider does not know the requested location (HTTP 404).
    #[error("Location not found by weather provider")]
    LocationNotFound,

    /// The provider answered with any other status >= 400.
    #[error("Weather provider returned HTTP {0}")]
    Status(u16),

    /// The request failed (network, DNS, TLS, timeout, undecodable body).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Why a lookup produced no summary.
///
/// [`crate::WeatherService::lookup`] returns this so callers and logs can tell
/// the causes apart. The public `get_weather_*` operations flatten every
/// variant into `None`.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// The city was empty after trimming. Nothing was dispatched.
    #[error("City name is blank")]
    InvalidQuery,

    /// The provider reported no such location.
    #[error("City \"{0}\" not found")]
    NotFound(String),

    /// The provider was unreachable or answered with an error.
    #[error("Weather provider failure: {0}")]
    Upstream(#[source] ProviderError),
}

impl WeatherError {
    /// Classify a provider failure for the given (trimmed) city.
    pub fn from_provider(city: &str, err: ProviderError) -> Self {
        match err {
            ProviderError::LocationNotFound => WeatherError::NotFound(city.to_string()),
            other => WeatherError::Upstream(other),
        }
    }
}
