//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DestinationLeg, Itinerary, LegDraft, LegUpdate, TransportMode};

/// A destination leg as it appears in the editor, sent by the client.
///
/// Everything is optional except the dates' shape: a leg freshly added in
/// the browser may have empty labels and no dates yet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub transport_type: TransportMode,
}

impl LegDto {
    /// Convert into the domain draft shape.
    pub fn into_draft(self) -> LegDraft {
        LegDraft {
            name: self.name,
            city: self.city,
            country: self.country,
            arrival: self.arrival_date,
            departure: self.departure_date,
            transport: self.transport_type,
        }
    }
}

/// A single field edit, as `{"field": "...", "value": ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum LegChangeDto {
    Name(String),
    City(String),
    Country(String),
    ArrivalDate(NaiveDate),
    DepartureDate(NaiveDate),
    TransportType(TransportMode),
}

impl From<LegChangeDto> for LegUpdate {
    fn from(change: LegChangeDto) -> Self {
        match change {
            LegChangeDto::Name(v) => LegUpdate::Name(v),
            LegChangeDto::City(v) => LegUpdate::City(v),
            LegChangeDto::Country(v) => LegUpdate::Country(v),
            LegChangeDto::ArrivalDate(v) => LegUpdate::Arrival(v),
            LegChangeDto::DepartureDate(v) => LegUpdate::Departure(v),
            LegChangeDto::TransportType(v) => LegUpdate::Transport(v),
        }
    }
}

/// One editing operation against the itinerary.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ItineraryOpDto {
    /// Append a new leg with derived default dates.
    Add,
    /// Remove the leg at `index` (ignored for the last remaining leg).
    Remove { index: usize },
    /// Move the leg at `from` to position `to`.
    Move { from: usize, to: usize },
    /// Edit one field of the leg at `index`.
    Update { index: usize, change: LegChangeDto },
}

/// Request to apply one operation to the current editor state.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryEditRequest {
    /// Current leg list as held by the editor.
    pub legs: Vec<LegDto>,

    /// Currently selected leg index.
    #[serde(default)]
    pub selected: usize,

    /// The operation to apply.
    pub op: ItineraryOpDto,
}

/// A leg in a response, with server-assigned editing id and resolved dates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegStateDto {
    pub id: u64,
    pub name: String,
    pub city: String,
    pub country: String,
    pub arrival_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub transport_type: TransportMode,
    pub stay_days: i64,
}

impl LegStateDto {
    /// Create from a domain leg.
    pub fn from_leg(leg: &DestinationLeg) -> Self {
        Self {
            id: leg.id.0,
            name: leg.name.clone(),
            city: leg.city.clone(),
            country: leg.country.clone(),
            arrival_date: leg.arrival,
            departure_date: leg.departure,
            transport_type: leg.transport,
            stay_days: leg.stay_days(),
        }
    }
}

/// The corrected editor state returned after an operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryStateDto {
    pub legs: Vec<LegStateDto>,
    pub selected: usize,
}

impl ItineraryStateDto {
    /// Create from an itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            legs: itinerary.legs().iter().map(LegStateDto::from_leg).collect(),
            selected: itinerary.selected_index(),
        }
    }
}

/// Request to submit a finished trip.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTripRequest {
    pub name: String,
    pub trip_type: String,
    #[serde(default)]
    pub budget: f64,
    pub currency: String,
    #[serde(default)]
    pub is_public: bool,
    pub legs: Vec<LegDto>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
