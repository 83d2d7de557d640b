#![allow(dead_code)]

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use delaycast::classifier::{ClassifierResult, DelayClassifier};
use delaycast::features::CategoryMappings;
use delaycast::models::{FeatureRow, FlightQuery, RawFlightRecord};
use delaycast::search::{FlightOffer, FlightSearch, SearchError};

/// Mapping table with two carriers (AA -> 1, DL -> 4), two airports, all
/// 24 departure buckets and two states. Matches the scenarios in the
/// integration tests.
pub fn small_mappings() -> CategoryMappings {
    let airports: HashMap<String, i64> = [("ATL".to_string(), 0), ("LAX".to_string(), 1)].into();
    let carriers: HashMap<String, i64> = [("AA".to_string(), 1), ("DL".to_string(), 4)].into();
    let blocks: HashMap<String, i64> = (0..24)
        .map(|h| (format!("{:02}:00-{:02}:59", h, h), h as i64))
        .collect();
    let states: HashMap<String, i64> =
        [("Georgia".to_string(), 0), ("California".to_string(), 1)].into();
    CategoryMappings::from_maps(
        airports.clone(),
        airports,
        carriers,
        blocks,
        states.clone(),
        states,
    )
}

/// A raw record for the ATL -> LAX route with the given flight info.
pub fn record_with_flight(flight_info: &str) -> RawFlightRecord {
    RawFlightRecord {
        origin: "ATL".to_string(),
        dest: "LAX".to_string(),
        departure_date: "2026-08-07".to_string(),
        departure_time: "09:15".to_string(),
        arrival_time: "14:05".to_string(),
        flight_info: flight_info.to_string(),
        airline: None,
        airplane: None,
        air_time: 290.0,
        origin_state: Some("Georgia".to_string()),
        dest_state: Some("California".to_string()),
        origin_latitude: Some(33.6367),
        origin_longitude: Some(-84.4281),
        dest_latitude: Some(33.9425),
        dest_longitude: Some(-118.4081),
    }
}

/// Classifier stub answering a fixed prediction sequence.
#[derive(Debug)]
pub struct FixedClassifier(pub Vec<bool>);

impl DelayClassifier for FixedClassifier {
    fn kind(&self) -> &'static str {
        "stub"
    }

    fn predict(&self, rows: &[FeatureRow]) -> ClassifierResult<Vec<bool>> {
        assert_eq!(rows.len(), self.0.len(), "stub asked for unexpected batch size");
        Ok(self.0.clone())
    }
}

/// Search stub answering a fixed list of offers.
pub struct StaticSearch(pub Vec<FlightOffer>);

#[async_trait]
impl FlightSearch for StaticSearch {
    async fn search(&self, _query: &FlightQuery) -> Result<Vec<FlightOffer>, SearchError> {
        Ok(self.0.clone())
    }
}

/// Search stub that always fails with an API error.
pub struct FailingSearch;

#[async_trait]
impl FlightSearch for FailingSearch {
    async fn search(&self, _query: &FlightQuery) -> Result<Vec<FlightOffer>, SearchError> {
        Err(SearchError::Api {
            message: "quota exceeded".to_string(),
        })
    }
}

/// An offer shaped like the search API's first itinerary leg.
pub fn offer(flight_number: &str, departure: &str, arrival: &str) -> FlightOffer {
    FlightOffer {
        flight_number: Some(flight_number.to_string()),
        airline: None,
        airplane: None,
        duration_min: Some(290.0),
        departure_time: Some(departure.to_string()),
        arrival_time: Some(arrival.to_string()),
    }
}

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
