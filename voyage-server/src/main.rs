use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use voyage_server::cache::{CachedTripsClient, TripCacheConfig};
use voyage_server::trips::{TripsClient, TripsConfig};
use voyage_server::web::{AppState, create_router};

/// Static assets directory, relative to the working directory.
const STATIC_DIR: &str = "static";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Get credentials from environment
    let api_key = std::env::var("VOYAGEWISE_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: VOYAGEWISE_API_KEY not set. API calls will fail.");
        String::new()
    });

    // Create trips client
    let mut trips_config = TripsConfig::new(&api_key);
    if let Ok(base_url) = std::env::var("VOYAGEWISE_API_URL") {
        trips_config = trips_config.with_base_url(base_url);
    }
    let trips_client = TripsClient::new(trips_config).expect("Failed to create trips client");

    // Create cached client
    let cache_config = TripCacheConfig::default();
    let cached_trips = CachedTripsClient::new(trips_client, &cache_config);

    // Build app state
    let state = AppState::new(cached_trips);

    // Create router
    let app = create_router(state, STATIC_DIR);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Voyagewise listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the trip wizard.");
    println!();
    println!("Endpoints:");
    println!("  GET  /health         - Health check");
    println!("  GET  /dashboard      - Persona dashboard");
    println!("  POST /api/itinerary  - Apply an itinerary edit");
    println!("  POST /trips          - Submit a trip");
    println!("  GET  /trips/:id      - Trip detail");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
