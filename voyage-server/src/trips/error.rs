//! Trip API client error types.

use std::fmt;

/// Errors from the trip-storage HTTP client.
#[derive(Debug)]
pub enum TripsError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Trip does not exist (or is not visible to this account)
    TripNotFound,

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,
}

impl fmt::Display for TripsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripsError::Http(e) => write!(f, "HTTP error: {e}"),
            TripsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            TripsError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            TripsError::TripNotFound => write!(f, "trip not found"),
            TripsError::RateLimited => write!(f, "rate limited by trip API"),
            TripsError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
        }
    }
}

impl std::error::Error for TripsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TripsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TripsError {
    fn from(err: reqwest::Error) -> Self {
        TripsError::Http(err)
    }
}
