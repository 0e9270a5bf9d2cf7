//! Caching layer for trip API responses.
//!
//! Trip records change rarely once created, so trip fetches are cached by id
//! with a short TTL. A freshly created trip seeds the cache, so the redirect
//! to its detail page never refetches.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::trips::{NewTripPayload, TripRecord, TripsClient, TripsError};

/// Cached trip entry.
type TripEntry = Arc<TripRecord>;

/// Configuration for the trip cache.
#[derive(Debug, Clone)]
pub struct TripCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for TripCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache for trip API responses.
pub struct TripCache {
    /// Trip records keyed by id.
    trips: MokaCache<i64, TripEntry>,
}

impl TripCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &TripCacheConfig) -> Self {
        let trips = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { trips }
    }

    /// Get a cached trip.
    pub async fn get(&self, id: i64) -> Option<TripEntry> {
        self.trips.get(&id).await
    }

    /// Insert a trip into the cache.
    pub async fn insert(&self, id: i64, entry: TripEntry) {
        self.trips.insert(id, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.trips.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.trips.invalidate_all();
    }
}

/// Trips client with caching.
///
/// Wraps a `TripsClient` and caches fetched trips by id.
pub struct CachedTripsClient {
    client: TripsClient,
    cache: TripCache,
}

impl CachedTripsClient {
    /// Create a new cached client.
    pub fn new(client: TripsClient, cache_config: &TripCacheConfig) -> Self {
        Self {
            client,
            cache: TripCache::new(cache_config),
        }
    }

    /// Fetch a trip by id, using the cache if available.
    pub async fn fetch_trip(&self, id: i64) -> Result<TripEntry, TripsError> {
        if let Some(cached) = self.cache.get(id).await {
            return Ok(cached);
        }

        let record = self.client.fetch_trip(id).await?;
        let entry = Arc::new(record);

        self.cache.insert(id, entry.clone()).await;

        Ok(entry)
    }

    /// Create a trip and seed the cache with the returned record.
    pub async fn create_trip(&self, payload: &NewTripPayload) -> Result<TripEntry, TripsError> {
        let record = self.client.create_trip(payload).await?;
        let entry = Arc::new(record);

        self.cache.insert(entry.id, entry.clone()).await;

        Ok(entry)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &TripsClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
