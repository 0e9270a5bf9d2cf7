//! Web layer for the travel planner.
//!
//! Provides the trip wizard, persona dashboards, the stateless itinerary
//! editing endpoint, and trip submission/detail pages.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
