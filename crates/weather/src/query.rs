//! City query normalization and cache key derivation.

use std::fmt;

use ecogarden_core::hashing::sha256_hex;

/// Prefix shared by every weather cache key.
const KEY_PREFIX: &str = "weather_";

/// A validated city query: user text with surrounding whitespace removed.
///
/// The original casing is kept because it is what gets sent upstream and
/// what is shown when the provider does not confirm a name. Case only
/// matters for the cache key, see [`CacheKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Trim `raw`; `None` if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let city = raw.trim();
        if city.is_empty() {
            return None;
        }
        Some(Self {
            city: city.to_string(),
        })
    }

    /// The trimmed city name.
    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey::for_city(&self.city)
    }
}

/// Cache key for a city: `weather_` followed by the SHA-256 hex digest of
/// the trimmed, lowercased name.
///
/// Every casing and whitespace variant of a city maps to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn for_city(city: &str) -> Self {
        let normalized = city.trim().to_lowercase();
        Self(format!("{KEY_PREFIX}{}", sha256_hex(normalized.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
