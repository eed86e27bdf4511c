//! Normalized weather summary and upstream payload decoding.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The weather facts returned to API clients.
///
/// Only `city` is guaranteed. Everything else is whatever the provider
/// happened to include; a missing or mistyped field is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Provider-confirmed name, or the trimmed query when none was given.
    pub city: String,
    /// Temperature in °C.
    pub temperature: Option<f64>,
    /// Perceived temperature in °C.
    pub feels_like: Option<f64>,
    /// Relative humidity in percent.
    pub humidity: Option<i64>,
    pub description: Option<String>,
    /// Wind speed in m/s.
    pub wind_speed: Option<f64>,
}

impl WeatherSummary {
    /// Build a summary from a provider payload.
    ///
    /// Reads `name`, `main.temp`, `main.feels_like`, `main.humidity`,
    /// `weather[0].description` and `wind.speed`. `fallback_city` is used
    /// when `name` is absent or blank.
    pub fn from_payload(payload: &Value, fallback_city: &str) -> Self {
        let city = payload
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback_city)
            .to_string();

        Self {
            city,
            temperature: payload.pointer("/main/temp").and_then(Value::as_f64),
            feels_like: payload.pointer("/main/feels_like").and_then(Value::as_f64),
            humidity: payload.pointer("/main/humidity").and_then(as_whole_number),
            description: payload
                .pointer("/weather/0/description")
                .and_then(Value::as_str)
                .map(str::to_string),
            wind_speed: payload.pointer("/wind/speed").and_then(Value::as_f64),
        }
    }
}

/// Accept `60` as well as `60.0`.
fn as_whole_number(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))
}
