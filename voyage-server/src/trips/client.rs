//! Trip-storage HTTP client.
//!
//! Provides async methods for creating and fetching trips against the
//! Voyagewise REST API. Handles authentication and bounds concurrent
//! requests.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tokio::sync::Semaphore;

use super::error::TripsError;
use super::types::{NewTripPayload, TripRecord};

/// Default base URL for the trip-storage API.
const DEFAULT_BASE_URL: &str = "https://api.voyagewise.app/api";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the trips client.
#[derive(Debug, Clone)]
pub struct TripsConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TripsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Trip-storage API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct TripsClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl TripsClient {
    /// Create a new trips client with the given configuration.
    pub fn new(config: TripsConfig) -> Result<Self, TripsError> {
        let mut headers = HeaderMap::new();

        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(|_| {
            TripsError::ApiError {
                status: 0,
                message: "Invalid API key format".to_string(),
            }
        })?;
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Create a trip (`POST /trips`).
    ///
    /// Returns the persisted record, which includes the server-assigned ids
    /// and the leg sequence in its stored order.
    pub async fn create_trip(&self, payload: &NewTripPayload) -> Result<TripRecord, TripsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TripsError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/trips", self.base_url);

        let response = self.http.post(&url).json(payload).send().await?;
        Self::parse_trip_response(response).await
    }

    /// Fetch a trip by id (`GET /trips/:id`).
    pub async fn fetch_trip(&self, id: i64) -> Result<TripRecord, TripsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TripsError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/trips/{}", self.base_url, id);

        let response = self.http.get(&url).send().await?;
        Self::parse_trip_response(response).await
    }

    /// Map status codes and decode the body into a `TripRecord`.
    async fn parse_trip_response(response: reqwest::Response) -> Result<TripRecord, TripsError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TripsError::Unauthorized);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TripsError::TripNotFound);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TripsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TripsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TripsError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}
