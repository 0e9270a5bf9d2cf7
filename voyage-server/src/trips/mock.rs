//! Mock trips client for testing without API access.
//!
//! Loads sample trip records from JSON files and serves them as if they were
//! live API responses. Created trips are stored in memory.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::error::TripsError;
use super::types::{NewTripPayload, TripRecord};

/// Mock trips client that serves data from JSON files.
///
/// Useful for development and testing without real API credentials.
#[derive(Clone, Default)]
pub struct MockTripsClient {
    /// Trip records keyed by id.
    trips: Arc<RwLock<HashMap<i64, TripRecord>>>,
}

impl MockTripsClient {
    /// Create an empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{id}.json` (e.g., `1.json`, `42.json`), each
    /// containing one `TripRecord`.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, TripsError> {
        let data_dir = data_dir.as_ref();
        let mut trips = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| TripsError::ApiError {
            status: 0,
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| TripsError::ApiError {
                status: 0,
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let json = std::fs::read_to_string(&path).map_err(|e| TripsError::ApiError {
                status: 0,
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let record: TripRecord =
                serde_json::from_str(&json).map_err(|e| TripsError::Json {
                    message: format!("Failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            trips.insert(record.id, record);
        }

        if trips.is_empty() {
            return Err(TripsError::ApiError {
                status: 0,
                message: format!("No mock trip files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            trips: Arc::new(RwLock::new(trips)),
        })
    }

    /// Create a trip.
    ///
    /// Mimics the real `TripsClient::create_trip` interface; assigns the next
    /// free id and stores the record in memory.
    pub async fn create_trip(&self, payload: &NewTripPayload) -> Result<TripRecord, TripsError> {
        let mut trips = self.trips.write().await;
        let id = trips.keys().max().copied().unwrap_or(0) + 1;

        let record = TripRecord {
            id,
            name: payload.name.clone(),
            trip_type: payload.trip_type.clone(),
            start_date: payload.start_date,
            end_date: payload.end_date,
            destination: payload.destination.clone(),
            country: payload.country.clone(),
            budget: payload.budget,
            currency: payload.currency.clone(),
            is_public: payload.is_public,
            is_multi_destination: payload.is_multi_destination,
            destinations: payload
                .destinations
                .iter()
                .enumerate()
                .map(|(i, leg)| super::types::LegRecord {
                    id: i as i64 + 1,
                    name: leg.name.clone(),
                    city: leg.city.clone(),
                    country: leg.country.clone(),
                    arrival_date: leg.arrival_date,
                    departure_date: leg.departure_date,
                    transport_type: leg.transport_type,
                })
                .collect(),
        };

        trips.insert(id, record.clone());
        Ok(record)
    }

    /// Fetch a trip by id.
    pub async fn fetch_trip(&self, id: i64) -> Result<TripRecord, TripsError> {
        self.trips
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(TripsError::TripNotFound)
    }
}
