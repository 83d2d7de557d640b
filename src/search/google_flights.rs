//! SerpApi-style Google Flights client.

use async_trait::async_trait;
use serde::Deserialize;

use crate::models::FlightQuery;
use crate::search::{FlightOffer, FlightSearch, SearchError};

const DEFAULT_BASE_URL: &str = "https://serpapi.com/search";

/// Google Flights search client.
///
/// Queries the `google_flights` engine for nonstop round-trip-priced
/// one-way itineraries and flattens `best_flights` + `other_flights` into
/// one offer per itinerary, taking the first leg of each.
#[derive(Debug, Clone)]
pub struct GoogleFlightsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GoogleFlightsClient {
    /// Create a client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the endpoint, for tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl FlightSearch for GoogleFlightsClient {
    async fn search(&self, query: &FlightQuery) -> Result<Vec<FlightOffer>, SearchError> {
        let date = query.date.format("%Y-%m-%d").to_string();
        let response: SearchResponse = self
            .http
            .get(&self.base_url)
            .query(&[
                ("engine", "google_flights"),
                ("departure_id", query.origin.as_str()),
                ("arrival_id", query.dest.as_str()),
                ("hl", "en"),
                ("gl", "us"),
                ("outbound_date", date.as_str()),
                ("stops", "1"),
                ("type", "2"),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(message) = response.error {
            return Err(SearchError::Api { message });
        }

        let offers: Vec<FlightOffer> = response
            .best_flights
            .into_iter()
            .chain(response.other_flights)
            .filter_map(|itinerary| itinerary.flights.into_iter().next())
            .map(|leg| FlightOffer {
                flight_number: leg.flight_number,
                airline: leg.airline,
                airplane: leg.airplane,
                duration_min: leg.duration,
                departure_time: leg.departure_airport.and_then(|a| a.time),
                arrival_time: leg.arrival_airport.and_then(|a| a.time),
            })
            .collect();

        if offers.is_empty() {
            log::warn!(
                "flight search returned no itineraries for {} -> {} on {}",
                query.origin,
                query.dest,
                date
            );
        }

        Ok(offers)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    error: Option<String>,
    #[serde(default)]
    best_flights: Vec<Itinerary>,
    #[serde(default)]
    other_flights: Vec<Itinerary>,
}

#[derive(Debug, Deserialize)]
struct Itinerary {
    #[serde(default)]
    flights: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct Leg {
    flight_number: Option<String>,
    airline: Option<String>,
    airplane: Option<String>,
    duration: Option<f64>,
    departure_airport: Option<AirportTime>,
    arrival_airport: Option<AirportTime>,
}

#[derive(Debug, Deserialize)]
struct AirportTime {
    time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing_flattens_best_and_other() {
        let json = r#"{
            "best_flights": [
                {"flights": [{
                    "flight_number": "DL 1234",
                    "airline": "Delta",
                    "airplane": "Boeing 757",
                    "duration": 290,
                    "departure_airport": {"name": "Hartsfield-Jackson", "time": "2026-08-07 09:15"},
                    "arrival_airport": {"name": "Los Angeles", "time": "2026-08-07 14:05"}
                }]}
            ],
            "other_flights": [
                {"flights": [{"flight_number": "AA 100", "duration": 300}]},
                {"flights": []}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.error.is_none());
        assert_eq!(response.best_flights.len(), 1);
        assert_eq!(response.other_flights.len(), 2);

        let leg = &response.best_flights[0].flights[0];
        assert_eq!(leg.flight_number.as_deref(), Some("DL 1234"));
        assert_eq!(leg.duration, Some(290.0));
        assert_eq!(
            leg.departure_airport.as_ref().unwrap().time.as_deref(),
            Some("2026-08-07 09:15")
        );
    }

    #[test]
    fn test_error_body_parses() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"error": "Invalid API key."}"#).unwrap();
        assert_eq!(response.error.as_deref(), Some("Invalid API key."));
    }
}
