//! Wire types for the trip-storage REST API.
//!
//! Field names are camelCase on the wire, matching the API contract. Dates
//! travel as ISO `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::TransportMode;

/// A destination leg as submitted to `POST /trips`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLegPayload {
    pub name: String,
    pub city: String,
    pub country: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub transport_type: TransportMode,
}

/// The `POST /trips` request body.
///
/// `destination`/`country` are the trip's canonical single destination (the
/// first leg); the full sequence rides along in `destinations` for
/// multi-destination trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTripPayload {
    pub name: String,
    pub trip_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub destination: String,
    pub country: String,
    pub budget: f64,
    pub currency: String,
    pub is_public: bool,
    pub is_multi_destination: bool,
    pub destinations: Vec<NewLegPayload>,
}

/// A persisted destination leg as returned by the API.
///
/// Legs arrive pre-sorted by the server's persisted order index; the order of
/// the array is the travel sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub city: String,
    pub country: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    #[serde(default)]
    pub transport_type: TransportMode,
}

/// A persisted trip as returned by `GET /trips/:id` and `POST /trips`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: i64,
    pub name: String,
    pub trip_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub destination: String,
    pub country: String,
    pub budget: f64,
    pub currency: String,
    pub is_public: bool,
    pub is_multi_destination: bool,
    #[serde(default)]
    pub destinations: Vec<LegRecord>,
}
