//! Read-through weather lookup.

use std::time::Duration;

use ecogarden_core::location::HasCity;

use crate::error::WeatherError;
use crate::provider::WeatherProvider;
use crate::query::WeatherQuery;
use crate::store::ExpiringStore;
use crate::summary::WeatherSummary;

/// Resolves cities to weather summaries through an expiring cache.
///
/// On a miss the provider is called once and a successful answer is stored
/// for `ttl`. Provider failures and unknown locations are not stored, so the
/// next call for that city goes upstream again.
///
/// Concurrent misses for the same city are not de-duplicated: each caller
/// that misses performs its own upstream call and the last write wins.
pub struct WeatherService<P, S> {
    provider: P,
    store: S,
    ttl: Duration,
}

impl<P, S> WeatherService<P, S>
where
    P: WeatherProvider,
    S: ExpiringStore<WeatherSummary>,
{
    pub fn new(provider: P, store: S, ttl: Duration) -> Self {
        Self {
            provider,
            store,
            ttl,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Look up the weather for `city`, reporting why nothing was found.
    pub async fn lookup(&self, city: &str) -> Result<WeatherSummary, WeatherError> {
        let query = WeatherQuery::parse(city).ok_or(WeatherError::InvalidQuery)?;
        let key = query.cache_key();

        if let Some(summary) = self.store.get(key.as_str()).await {
            tracing::debug!(city = query.city(), %key, "Weather cache hit");
            return Ok(summary);
        }
        tracing::debug!(city = query.city(), %key, "Weather cache miss, querying provider");

        let payload = self
            .provider
            .fetch(query.city())
            .await
            .map_err(|e| WeatherError::from_provider(query.city(), e))?;

        let summary = WeatherSummary::from_payload(&payload, query.city());
        self.store
            .insert(key.into_string(), summary.clone(), self.ttl)
            .await;

        Ok(summary)
    }

    /// Weather for a user-supplied city name, or `None`.
    ///
    /// Blank names, unknown cities and provider failures all yield `None`.
    pub async fn get_weather_for_city(&self, city: &str) -> Option<WeatherSummary> {
        match self.lookup(city).await {
            Ok(summary) => Some(summary),
            Err(WeatherError::InvalidQuery) => None,
            Err(err @ WeatherError::NotFound(_)) => {
                tracing::debug!(error = %err, "Weather lookup found nothing");
                None
            }
            Err(err) => {
                tracing::warn!(city = city.trim(), error = %err, "Weather provider failure");
                None
            }
        }
    }

    /// Weather for the city stored on `user`, or `None`.
    ///
    /// A missing or blank city short-circuits without touching the cache or
    /// the provider.
    pub async fn get_weather_for_user<U>(&self, user: &U) -> Option<WeatherSummary>
    where
        U: HasCity + ?Sized,
    {
        let city = user.city().map(str::trim).filter(|c| !c.is_empty())?;
        self.get_weather_for_city(city).await
    }
}
