//! Conversion between the in-memory itinerary and the trip API wire types.
//!
//! Submission direction: the first leg's city/country become the trip's
//! canonical single destination, the trip spans first arrival to last
//! departure, and the full leg sequence rides along for multi-destination
//! trips. Load direction: the server's persisted leg order is trusted as-is;
//! no date correction runs until the user edits.

use chrono::NaiveDate;

use crate::domain::{DomainError, Itinerary, LegDraft};

use super::types::{NewLegPayload, NewTripPayload, TripRecord};

/// Trip-level fields collected by the wizard outside the sequencer.
#[derive(Debug, Clone, PartialEq)]
pub struct TripMeta {
    pub name: String,
    pub trip_type: String,
    pub budget: f64,
    pub currency: String,
    pub is_public: bool,
}

/// Translate a finished itinerary into the `POST /trips` body.
pub fn to_new_trip(itinerary: &Itinerary, meta: &TripMeta) -> NewTripPayload {
    let legs = itinerary.legs();
    // Safe: an itinerary under edit is never empty
    let first = &legs[0];
    let last = &legs[legs.len() - 1];

    NewTripPayload {
        name: meta.name.clone(),
        trip_type: meta.trip_type.clone(),
        start_date: first.arrival,
        end_date: last.departure,
        destination: first.city.clone(),
        country: first.country.clone(),
        budget: meta.budget,
        currency: meta.currency.clone(),
        is_public: meta.is_public,
        is_multi_destination: legs.len() > 1,
        destinations: legs
            .iter()
            .map(|leg| NewLegPayload {
                name: leg.name.clone(),
                city: leg.city.clone(),
                country: leg.country.clone(),
                arrival_date: leg.arrival,
                departure_date: leg.departure,
                transport_type: leg.transport,
            })
            .collect(),
    }
}

/// Seed an itinerary from a persisted trip record.
///
/// Multi-destination records seed from their leg array in the server's
/// order. A single-destination record (empty leg array) seeds one leg from
/// the trip's own destination and date range.
///
/// # Errors
///
/// Never fails for well-formed records; a record with no legs and no
/// destination fields would produce an empty itinerary, which is rejected.
pub fn itinerary_from_record(
    record: &TripRecord,
    today: NaiveDate,
) -> Result<Itinerary, DomainError> {
    let drafts: Vec<LegDraft> = if record.destinations.is_empty() {
        vec![
            LegDraft::new(
                record.destination.clone(),
                record.country.clone(),
                record.start_date,
                record.end_date,
            )
            .with_name(record.name.clone()),
        ]
    } else {
        record
            .destinations
            .iter()
            .map(|leg| {
                LegDraft::new(
                    leg.city.clone(),
                    leg.country.clone(),
                    leg.arrival_date,
                    leg.departure_date,
                )
                .with_name(leg.name.clone())
                .with_transport(leg.transport_type)
            })
            .collect()
    };

    Itinerary::from_drafts(drafts, today)
}
