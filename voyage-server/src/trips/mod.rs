//! Trip-storage API integration.
//!
//! HTTP client for the Voyagewise REST trip API, the wire types it speaks,
//! and the adapter that translates between the in-memory itinerary and the
//! API's payload contract.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{TripsClient, TripsConfig};
pub use convert::{TripMeta, itinerary_from_record, to_new_trip};
pub use error::TripsError;
pub use mock::MockTripsClient;
pub use types::{LegRecord, NewLegPayload, NewTripPayload, TripRecord};
