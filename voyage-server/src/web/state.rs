//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedTripsClient;

/// Shared application state.
///
/// Contains the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cached trip API client
    pub trips: Arc<CachedTripsClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(trips: CachedTripsClient) -> Self {
        Self {
            trips: Arc::new(trips),
        }
    }
}
