//! Weather lookups with a read-through cache.
//!
//! [`WeatherService`] resolves a city name to a [`WeatherSummary`], keeping
//! successful upstream answers in an [`ExpiringStore`] for a fixed TTL so
//! each distinct city costs at most one upstream call per TTL window.
//! Failures and "no such city" answers are never cached.

pub mod config;
pub mod error;
pub mod provider;
pub mod query;
pub mod service;
pub mod store;
pub mod summary;

pub use config::WeatherConfig;
pub use error::{ProviderError, WeatherError};
pub use provider::{OpenWeatherClient, WeatherProvider};
pub use query::{CacheKey, WeatherQuery};
pub use service::WeatherService;
pub use store::{ExpiringStore, MemoryStore};
pub use summary::WeatherSummary;

/// The service wiring used by the HTTP server.
pub type OpenWeatherService = WeatherService<OpenWeatherClient, MemoryStore<WeatherSummary>>;
