//! Flight query, raw record and prediction types.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A flight search request: where from, where to, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightQuery {
    /// Origin airport IATA code, uppercase.
    pub origin: String,
    /// Destination airport IATA code, uppercase.
    pub dest: String,
    /// Departure date.
    pub date: NaiveDate,
}

impl FlightQuery {
    /// Build a query, normalizing airport codes to uppercase.
    pub fn new(origin: impl Into<String>, dest: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            origin: origin.into().trim().to_uppercase(),
            dest: dest.into().trim().to_uppercase(),
            date,
        }
    }
}

/// One itinerary leg returned by the search, after the geographic join.
///
/// This is the heterogeneous input to the feature normalizer. The state
/// and coordinate fields are `None` when the airport is missing from the
/// coordinates table; the normalizer encodes absent states with the -1
/// sentinel instead of failing. Both airport codes and the departure date
/// must always be present or downstream parsing fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFlightRecord {
    /// Origin airport IATA code.
    pub origin: String,
    /// Destination airport IATA code.
    pub dest: String,
    /// Departure date text, `YYYY-MM-DD`.
    pub departure_date: String,
    /// Departure clock time text as returned by the search API.
    pub departure_time: String,
    /// Arrival clock time text as returned by the search API.
    pub arrival_time: String,
    /// Combined carrier and flight number, e.g. `"DL 1234"`.
    pub flight_info: String,
    /// Human-readable airline name (dropped by normalization).
    pub airline: Option<String>,
    /// Aircraft type (dropped by normalization).
    pub airplane: Option<String>,
    /// Flight duration in minutes.
    pub air_time: f64,
    /// Origin state name from the airport join.
    pub origin_state: Option<String>,
    /// Destination state name from the airport join.
    pub dest_state: Option<String>,
    /// Origin latitude (dropped by normalization).
    pub origin_latitude: Option<f64>,
    /// Origin longitude (dropped by normalization).
    pub origin_longitude: Option<f64>,
    /// Destination latitude (dropped by normalization).
    pub dest_latitude: Option<f64>,
    /// Destination longitude (dropped by normalization).
    pub dest_longitude: Option<f64>,
}

/// Human-readable delay prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DelayLabel {
    #[serde(rename = "Delayed")]
    Delayed,
    #[serde(rename = "On Time")]
    OnTime,
}

impl From<bool> for DelayLabel {
    fn from(delayed: bool) -> Self {
        if delayed {
            DelayLabel::Delayed
        } else {
            DelayLabel::OnTime
        }
    }
}

impl fmt::Display for DelayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelayLabel::Delayed => write!(f, "Delayed"),
            DelayLabel::OnTime => write!(f, "On Time"),
        }
    }
}

/// A scored itinerary leg ready for display or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPrediction {
    /// Recovered `"<carrier> <number>"` identifier.
    pub flight: String,
    /// Airline name, when the search API provided one.
    pub airline: Option<String>,
    /// Origin airport IATA code.
    pub origin: String,
    /// Destination airport IATA code.
    pub dest: String,
    /// Departure date, `YYYY-MM-DD`.
    pub departure_date: String,
    /// Departure time text.
    pub departure_time: String,
    /// Arrival time text.
    pub arrival_time: String,
    /// Flight duration in minutes.
    pub air_time: f64,
    /// Delay prediction.
    pub prediction: DelayLabel,
}
