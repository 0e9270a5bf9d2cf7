//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from API/IO errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// An itinerary under edit must contain at least one leg
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// A trip record could not seed an itinerary
    #[error("trip record is incomplete: {0}")]
    IncompleteTrip(&'static str),
}
