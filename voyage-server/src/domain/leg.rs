//! Destination leg types.
//!
//! A `DestinationLeg` is one stop in a multi-destination itinerary: where the
//! traveler is, when they arrive, when they depart, and how they got there
//! from the previous stop.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a destination leg.
///
/// Ids are allocated by the owning [`Itinerary`](super::Itinerary) and are
/// stable across reorders, so they can be used as the reorder key.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LegId(pub(crate) u64);

impl fmt::Debug for LegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LegId({})", self.0)
    }
}

impl fmt::Display for LegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing an unknown transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct InvalidTransportMode(pub String);

/// How the traveler reaches a leg from the previous one.
///
/// Meaningless for the first leg of an itinerary, which is conventionally
/// `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    None,
    Plane,
    Train,
    Bus,
    Car,
}

impl TransportMode {
    /// Returns the lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::None => "none",
            TransportMode::Plane => "plane",
            TransportMode::Train => "train",
            TransportMode::Bus => "bus",
            TransportMode::Car => "car",
        }
    }
}

impl FromStr for TransportMode {
    type Err = InvalidTransportMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TransportMode::None),
            "plane" => Ok(TransportMode::Plane),
            "train" => Ok(TransportMode::Train),
            "bus" => Ok(TransportMode::Bus),
            "car" => Ok(TransportMode::Car),
            other => Err(InvalidTransportMode(other.to_string())),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stop in a multi-destination itinerary.
///
/// Labels (`name`, `city`, `country`) are free text; there is no place
/// registry to validate against. Dates are calendar dates, time of day is
/// irrelevant.
///
/// Legs are only created by an [`Itinerary`](super::Itinerary), which assigns
/// the id and maintains the date invariants across the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationLeg {
    /// Stable identity, assigned by the owning itinerary.
    pub id: LegId,
    /// Display label for the stop.
    pub name: String,
    /// City, free text.
    pub city: String,
    /// Country, free text.
    pub country: String,
    /// Date the traveler arrives at this stop.
    pub arrival: NaiveDate,
    /// Date the traveler leaves this stop.
    pub departure: NaiveDate,
    /// Inbound transport from the previous stop.
    pub transport: TransportMode,
}

impl DestinationLeg {
    /// Length of the stay in whole days (non-negative once invariants hold).
    pub fn stay_days(&self) -> i64 {
        (self.departure - self.arrival).num_days()
    }
}

/// The id-less shape of a leg, used to seed an itinerary from persisted data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegDraft {
    pub name: String,
    pub city: String,
    pub country: String,
    pub arrival: Option<NaiveDate>,
    pub departure: Option<NaiveDate>,
    pub transport: TransportMode,
}

impl LegDraft {
    /// A draft with the given labels and dates.
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        arrival: NaiveDate,
        departure: NaiveDate,
    ) -> Self {
        Self {
            name: String::new(),
            city: city.into(),
            country: country.into(),
            arrival: Some(arrival),
            departure: Some(departure),
            transport: TransportMode::None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the inbound transport mode.
    pub fn with_transport(mut self, transport: TransportMode) -> Self {
        self.transport = transport;
        self
    }
}
