//! Upstream weather provider seam and the OpenWeatherMap client.

use std::future::Future;

use reqwest::StatusCode;
use serde_json::Value;

use crate::config::WeatherConfig;
use crate::error::ProviderError;

/// Units requested from the provider (°C, m/s).
const UNITS: &str = "metric";
/// Language of the textual description.
const LANG: &str = "fr";

/// A source of raw current-weather payloads for a city.
///
/// Implementations perform no caching and no retries.
pub trait WeatherProvider: Send + Sync {
    /// Fetch the provider payload for `city` (already trimmed).
    fn fetch(&self, city: &str) -> impl Future<Output = Result<Value, ProviderError>> + Send;
}

/// HTTP client for the OpenWeatherMap current-weather endpoint.
///
/// Sends `GET <base_url>?q=<city>&appid=<key>&units=metric&lang=fr`.
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    /// Build a client whose requests time out after `config.timeout()`.
    pub fn new(config: &WeatherConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self::with_client(
            client,
            config.base_url.clone(),
            config.api_key.clone(),
        ))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

impl WeatherProvider for OpenWeatherClient {
    async fn fetch(&self, city: &str) -> Result<Value, ProviderError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
                ("lang", LANG),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::LocationNotFound);
        }
        if status.is_client_error() || status.is_server_error() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
