//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tower_http::services::ServeDir;

use crate::domain::{DomainError, Itinerary, Persona};
use crate::trips::{TripMeta, TripsError, itinerary_from_record, to_new_trip};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(wizard_page))
        .route("/health", get(health))
        .route("/dashboard", get(dashboard_page))
        .route("/api/itinerary", post(edit_itinerary))
        .route("/trips", post(submit_trip))
        .route("/trips/:id", get(trip_page))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Trip wizard page, seeded with a fresh single-leg itinerary.
async fn wizard_page() -> impl IntoResponse {
    let itinerary = Itinerary::new(Local::now().date_naive());

    Html(
        WizardTemplate {
            itinerary: ItineraryView::from_itinerary(&itinerary),
        }
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Dashboard query parameters.
#[derive(Debug, Deserialize)]
struct DashboardRequest {
    persona: Option<String>,
}

/// Persona dashboard page.
async fn dashboard_page(Query(req): Query<DashboardRequest>) -> Result<Response, AppError> {
    let persona = match req.persona.as_deref() {
        None | Some("") => Persona::Tourist,
        Some(value) => value.parse().map_err(|_| AppError::BadRequest {
            message: format!("Unknown persona: {}", value),
        })?,
    };

    let template = DashboardTemplate {
        persona: PersonaView::from_persona(persona),
        personas: Persona::ALL
            .iter()
            .map(|&p| PersonaView::from_persona(p))
            .collect(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Apply one editing operation to the current editor state.
///
/// Stateless: the browser sends its leg list plus the operation, the
/// sequencer re-establishes the date invariants, and the corrected state
/// goes back. A well-formed operation never fails; out-of-range indices and
/// removing the last leg are ignored, matching the editor's behavior.
async fn edit_itinerary(headers: HeaderMap, body: Bytes) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: ItineraryEditRequest = serde_json::from_slice(&body).map_err(|e| {
        eprintln!("[JSON parse error] {e}");
        eprintln!("[Body] {}", String::from_utf8_lossy(&body));
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let today = Local::now().date_naive();
    let mut itinerary = seed_itinerary(req.legs, req.selected, today)?;
    apply_op(&mut itinerary, req.op);

    if accepts_html(&headers) {
        let template = LegListTemplate {
            itinerary: ItineraryView::from_itinerary(&itinerary),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json(ItineraryStateDto::from_itinerary(&itinerary)).into_response())
    }
}

/// Submit a finished trip to the trip-storage API.
async fn submit_trip(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let req: SubmitTripRequest = serde_json::from_slice(&body).map_err(|e| {
        eprintln!("[JSON parse error] {e}");
        eprintln!("[Body] {}", String::from_utf8_lossy(&body));
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Enter a trip name".to_string(),
        });
    }

    let today = Local::now().date_naive();
    let mut itinerary = seed_itinerary(req.legs, 0, today)?;
    // Re-establish date invariants at handoff; the editor normally keeps
    // them, but the submitted list is client state.
    itinerary.cascade();

    let meta = TripMeta {
        name: req.name,
        trip_type: req.trip_type,
        budget: req.budget,
        currency: req.currency,
        is_public: req.is_public,
    };
    let payload = to_new_trip(&itinerary, &meta);

    let record = state.trips.create_trip(&payload).await.map_err(AppError::from)?;

    Ok((StatusCode::CREATED, Json((*record).clone())).into_response())
}

/// Trip detail page (read-only itinerary view) or raw record as JSON.
async fn trip_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let record = state.trips.fetch_trip(id).await.map_err(AppError::from)?;

    if accepts_html(&headers) {
        // The viewer seeds its leg list through the same path as the wizard.
        let itinerary = itinerary_from_record(&record, Local::now().date_naive())
            .map_err(AppError::from)?;

        let template = TripTemplate {
            trip: TripView::from_record(&record),
            itinerary: ItineraryView::from_itinerary(&itinerary),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        Ok(Json((*record).clone()).into_response())
    }
}

/// Rebuild the editor's itinerary from the submitted leg list.
fn seed_itinerary(
    legs: Vec<LegDto>,
    selected: usize,
    today: NaiveDate,
) -> Result<Itinerary, AppError> {
    let drafts = legs.into_iter().map(LegDto::into_draft).collect();
    let mut itinerary = Itinerary::from_drafts(drafts, today)?;
    itinerary.select(selected.min(itinerary.len() - 1));
    Ok(itinerary)
}

/// Dispatch one operation to the sequencer.
fn apply_op(itinerary: &mut Itinerary, op: ItineraryOpDto) {
    match op {
        ItineraryOpDto::Add => {
            itinerary.add_leg();
        }
        ItineraryOpDto::Remove { index } => {
            itinerary.remove_leg(index);
        }
        ItineraryOpDto::Move { from, to } => {
            itinerary.reorder(from, to);
        }
        ItineraryOpDto::Update { index, change } => {
            itinerary.update_leg(index, change.into());
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<TripsError> for AppError {
    fn from(e: TripsError) -> Self {
        match e {
            TripsError::TripNotFound => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::EmptyItinerary => AppError::BadRequest {
                message: "An itinerary needs at least one destination".to_string(),
            },
            _ => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LegUpdate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leg_dto(city: &str, arr: NaiveDate, dep: NaiveDate) -> LegDto {
        LegDto {
            city: city.into(),
            arrival_date: Some(arr),
            departure_date: Some(dep),
            ..LegDto::default()
        }
    }

    #[test]
    fn seed_rejects_empty_leg_list() {
        let result = seed_itinerary(vec![], 0, date(2024, 6, 1));
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn seed_clamps_selection() {
        let legs = vec![leg_dto("Lisbon", date(2024, 6, 1), date(2024, 6, 4))];
        let itinerary = seed_itinerary(legs, 9, date(2024, 6, 1)).unwrap();
        assert_eq!(itinerary.selected_index(), 0);
    }

    #[test]
    fn apply_op_dispatches() {
        let legs = vec![
            leg_dto("Lisbon", date(2024, 6, 1), date(2024, 6, 4)),
            leg_dto("Madrid", date(2024, 6, 4), date(2024, 6, 8)),
        ];
        let mut itinerary = seed_itinerary(legs, 0, date(2024, 6, 1)).unwrap();

        apply_op(&mut itinerary, ItineraryOpDto::Add);
        assert_eq!(itinerary.len(), 3);

        apply_op(&mut itinerary, ItineraryOpDto::Remove { index: 2 });
        assert_eq!(itinerary.len(), 2);

        apply_op(&mut itinerary, ItineraryOpDto::Move { from: 1, to: 0 });
        assert_eq!(itinerary.legs()[0].city, "Madrid");

        apply_op(
            &mut itinerary,
            ItineraryOpDto::Update {
                index: 0,
                change: LegChangeDto::City("Valencia".into()),
            },
        );
        assert_eq!(itinerary.legs()[0].city, "Valencia");
    }

    #[test]
    fn apply_op_runs_cascade_on_move() {
        let legs = vec![
            leg_dto("A", date(2024, 1, 1), date(2024, 1, 5)),
            leg_dto("B", date(2024, 1, 6), date(2024, 1, 9)),
            leg_dto("C", date(2024, 1, 10), date(2024, 1, 14)),
        ];
        let mut itinerary = seed_itinerary(legs, 0, date(2024, 1, 1)).unwrap();

        apply_op(&mut itinerary, ItineraryOpDto::Move { from: 2, to: 0 });

        let legs = itinerary.legs();
        assert_eq!(legs[1].arrival, date(2024, 1, 14));
        assert_eq!(legs[2].arrival, date(2024, 1, 17));
    }

    #[test]
    fn update_op_maps_to_leg_update() {
        let update: LegUpdate = LegChangeDto::ArrivalDate(date(2024, 6, 2)).into();
        assert!(matches!(update, LegUpdate::Arrival(_)));
    }

    #[test]
    fn accepts_html_detection() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));

        headers.insert(header::ACCEPT, "application/json".parse().unwrap());
        assert!(!accepts_html(&headers));

        headers.insert(
            header::ACCEPT,
            "text/html,application/xhtml+xml".parse().unwrap(),
        );
        assert!(accepts_html(&headers));
    }
}
