//! Domain types for the travel planner.
//!
//! This module contains the core domain model: destination legs, the
//! itinerary sequencer that keeps their dates consistent, and the user
//! personas. Types enforce their invariants at construction and under every
//! mutation, so code that receives them can trust their validity.

mod error;
mod itinerary;
mod leg;
mod persona;

pub use error::DomainError;
pub use itinerary::{DEFAULT_STAY_DAYS, Itinerary, LegUpdate};
pub use leg::{DestinationLeg, InvalidTransportMode, LegDraft, LegId, TransportMode};
pub use persona::{InvalidPersona, Persona, PersonaTheme};
