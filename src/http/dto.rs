//! Data Transfer Objects for the HTTP API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{FlightPrediction, FlightQuery};

/// Search form / request body. Field names match the HTML form inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Origin airport IATA code
    pub airport_origin: String,
    /// Destination airport IATA code
    pub airport_destination: String,
    /// Departure date, `YYYY-MM-DD`
    pub flight_date: NaiveDate,
}

impl SearchRequest {
    /// Validate the request and build a [`FlightQuery`].
    ///
    /// Airport codes must be three ASCII letters; anything else is a
    /// client error, caught before any upstream call.
    pub fn into_query(self) -> Result<FlightQuery, String> {
        let query = FlightQuery::new(self.airport_origin, self.airport_destination, self.flight_date);
        for code in [&query.origin, &query.dest] {
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(format!("invalid airport code {:?}", code));
            }
        }
        Ok(query)
    }
}

/// One scored itinerary in the JSON API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionDto {
    /// Flight identifier, e.g. "DL 1234"
    pub flight: String,
    /// Airline name, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    /// Departure time text
    pub departure_time: String,
    /// Arrival time text
    pub arrival_time: String,
    /// Flight duration in minutes
    pub air_time: f64,
    /// "Delayed" or "On Time"
    pub prediction: String,
}

impl From<FlightPrediction> for PredictionDto {
    fn from(p: FlightPrediction) -> Self {
        Self {
            flight: p.flight,
            airline: p.airline,
            departure_time: p.departure_time,
            arrival_time: p.arrival_time,
            air_time: p.air_time,
            prediction: p.prediction.to_string(),
        }
    }
}

/// JSON API response for a prediction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionsResponse {
    /// Scored itineraries, search order preserved
    pub flights: Vec<PredictionDto>,
    /// Total count
    pub total: usize,
    /// Categorical fields that fell outside the mapping table
    pub unseen_categories: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Kind of the loaded model
    pub model: String,
    /// Number of airports in the coordinates table
    pub airports: usize,
}
