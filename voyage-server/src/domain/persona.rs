//! User personas.
//!
//! A persona controls dashboard copy and accent styling only, never
//! permissions. The closed enum plus a single dispatch table replaces ad hoc
//! role-string comparisons scattered through the UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown persona.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown persona: {0}")]
pub struct InvalidPersona(pub String);

/// One of the three user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Leisure traveler.
    Tourist,
    /// Digital nomad.
    Nomad,
    /// Business traveler.
    Business,
}

/// Presentation attributes for one persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaTheme {
    /// CSS accent color.
    pub accent: &'static str,
    /// Dashboard headline copy.
    pub tagline: &'static str,
    /// Sidebar entries as (label, href) pairs.
    pub sidebar: &'static [(&'static str, &'static str)],
}

impl Persona {
    /// All personas, in display order.
    pub const ALL: [Persona; 3] = [Persona::Tourist, Persona::Nomad, Persona::Business];

    /// Returns the lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Tourist => "tourist",
            Persona::Nomad => "nomad",
            Persona::Business => "business",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Tourist => "Tourist",
            Persona::Nomad => "Digital Nomad",
            Persona::Business => "Business Traveler",
        }
    }

    /// The dispatch table: every presentation decision a persona drives.
    pub fn theme(&self) -> PersonaTheme {
        match self {
            Persona::Tourist => PersonaTheme {
                accent: "#e07a3f",
                tagline: "Where to next? Your itineraries, bookings and travel ideas in one place.",
                sidebar: &[
                    ("My Trips", "/"),
                    ("Explore", "/explore"),
                    ("Bookings", "/bookings"),
                    ("Community", "/community"),
                ],
            },
            Persona::Nomad => PersonaTheme {
                accent: "#3f8fe0",
                tagline: "Plan long stays, track visas and keep your work setup moving with you.",
                sidebar: &[
                    ("My Trips", "/"),
                    ("Long Stays", "/stays"),
                    ("Workspaces", "/workspaces"),
                    ("Community", "/community"),
                ],
            },
            Persona::Business => PersonaTheme {
                accent: "#46505a",
                tagline: "Itineraries, expenses and bookings for your next work trip.",
                sidebar: &[
                    ("My Trips", "/"),
                    ("Expenses", "/expenses"),
                    ("Bookings", "/bookings"),
                    ("Reports", "/reports"),
                ],
            },
        }
    }
}

impl FromStr for Persona {
    type Err = InvalidPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tourist" => Ok(Persona::Tourist),
            "nomad" => Ok(Persona::Nomad),
            "business" => Ok(Persona::Business),
            other => Err(InvalidPersona(other.to_string())),
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
