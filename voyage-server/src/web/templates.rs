//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{DestinationLeg, Itinerary, Persona};
use crate::trips::TripRecord;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Trip wizard page with the itinerary editor.
#[derive(Template)]
#[template(path = "index.html")]
pub struct WizardTemplate {
    pub itinerary: ItineraryView,
}

/// Persona dashboard page.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub persona: PersonaView,
    pub personas: Vec<PersonaView>,
}

/// Read-only trip detail page.
#[derive(Template)]
#[template(path = "trip.html")]
pub struct TripTemplate {
    pub trip: TripView,
    pub itinerary: ItineraryView,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Leg editor fragment returned after an itinerary operation.
#[derive(Template)]
#[template(path = "leg_list.html")]
pub struct LegListTemplate {
    pub itinerary: ItineraryView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Itinerary view model for templates.
#[derive(Debug, Clone)]
pub struct ItineraryView {
    pub legs: Vec<LegView>,
}

impl ItineraryView {
    /// Create from a domain itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let selected = itinerary.selected_index();
        let legs = itinerary
            .legs()
            .iter()
            .enumerate()
            .map(|(i, leg)| LegView::from_leg(leg, i, i == selected))
            .collect();

        Self { legs }
    }
}

/// Destination leg view model.
#[derive(Debug, Clone)]
pub struct LegView {
    pub index: usize,
    pub name: String,
    pub city: String,
    pub country: String,
    pub arrival: String,
    pub departure: String,
    pub transport: &'static str,
    pub stay_days: i64,
    pub is_first: bool,
    pub is_selected: bool,
}

impl LegView {
    /// Create from a domain leg.
    pub fn from_leg(leg: &DestinationLeg, index: usize, is_selected: bool) -> Self {
        Self {
            index,
            name: leg.name.clone(),
            city: leg.city.clone(),
            country: leg.country.clone(),
            arrival: leg.arrival.format("%-d %b %Y").to_string(),
            departure: leg.departure.format("%-d %b %Y").to_string(),
            transport: leg.transport.as_str(),
            stay_days: leg.stay_days(),
            is_first: index == 0,
            is_selected,
        }
    }

    /// Display label: the city if set, otherwise a placeholder.
    pub fn title(&self) -> &str {
        if self.city.is_empty() {
            "New destination"
        } else {
            &self.city
        }
    }
}

/// Persona view model (theme resolved through the dispatch table).
#[derive(Debug, Clone)]
pub struct PersonaView {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
    pub tagline: &'static str,
    pub links: Vec<LinkView>,
}

/// Sidebar link view model.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub label: &'static str,
    pub href: &'static str,
}

impl PersonaView {
    /// Create from a persona.
    pub fn from_persona(persona: Persona) -> Self {
        let theme = persona.theme();
        Self {
            value: persona.as_str(),
            label: persona.label(),
            accent: theme.accent,
            tagline: theme.tagline,
            links: theme
                .sidebar
                .iter()
                .map(|&(label, href)| LinkView { label, href })
                .collect(),
        }
    }
}

/// Trip record view model for the detail page.
#[derive(Debug, Clone)]
pub struct TripView {
    pub id: i64,
    pub name: String,
    pub trip_type: String,
    pub destination: String,
    pub country: String,
    pub date_range: String,
    pub budget: String,
    pub is_multi_destination: bool,
}

impl TripView {
    /// Create from a trip record.
    pub fn from_record(record: &TripRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            trip_type: record.trip_type.clone(),
            destination: record.destination.clone(),
            country: record.country.clone(),
            date_range: format!(
                "{} – {}",
                record.start_date.format("%-d %b %Y"),
                record.end_date.format("%-d %b %Y")
            ),
            budget: format!("{:.0} {}", record.budget, record.currency),
            is_multi_destination: record.is_multi_destination,
        }
    }
}
