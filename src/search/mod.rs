//! Flight search client interface.
//!
//! The search API is an external collaborator: the crate only depends on
//! the [`FlightSearch`] trait, with the Google Flights client as the
//! production implementation and stubs injected in tests.

pub mod google_flights;

use async_trait::async_trait;

use crate::models::FlightQuery;

pub use google_flights::GoogleFlightsClient;

/// Errors raised by a flight search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Transport-level failure talking to the search API.
    #[error("flight search request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error object instead of results.
    #[error("flight search API error: {message}")]
    Api { message: String },
}

/// One offered itinerary leg, as returned by the search API.
///
/// Fields are optional where the API is unreliable; downstream parsing
/// decides what is fatal. The first leg of each itinerary is the unit the
/// predictor scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightOffer {
    /// Combined carrier and flight number, e.g. `"DL 1234"`.
    pub flight_number: Option<String>,
    /// Airline name.
    pub airline: Option<String>,
    /// Aircraft type.
    pub airplane: Option<String>,
    /// Duration in minutes.
    pub duration_min: Option<f64>,
    /// Departure time text.
    pub departure_time: Option<String>,
    /// Arrival time text.
    pub arrival_time: Option<String>,
}

/// A flight search backend.
#[async_trait]
pub trait FlightSearch: Send + Sync {
    /// Search itineraries for a query, returning one offer per itinerary.
    async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOffer>, SearchError>;
}
