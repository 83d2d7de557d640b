//! Delay prediction service.
//!
//! Implements the request control flow: obtain raw search rows, join them
//! with the airport table, normalize, classify, and re-attach labels to
//! the original rows via the recovered carrier/flight-number key.

use std::path::Path;

use anyhow::{Context, Result};

use crate::airports::AirportTable;
use crate::classifier::{load_classifier, DelayClassifier};
use crate::config::AppConfig;
use crate::features::{self, CategoryMappings};
use crate::models::{DelayLabel, FlightPrediction, FlightQuery, RawFlightRecord};
use crate::search::{FlightOffer, FlightSearch};

/// Immutable bundle of everything the predictor needs: the category
/// mapping table, the classifier, and the airport coordinates table.
///
/// Built once at startup from [`AppConfig`] and injected into each call;
/// safe to share across request tasks since nothing here mutates after
/// load.
#[derive(Debug)]
pub struct PredictionContext {
    pub mappings: CategoryMappings,
    pub classifier: Box<dyn DelayClassifier>,
    pub airports: AirportTable,
}

impl PredictionContext {
    /// Load mapping table, model and airport table from configured paths.
    pub fn load(config: &AppConfig) -> Result<Self> {
        let mappings = CategoryMappings::load(&config.mappings_path)
            .context("failed to load category mappings")?;
        let classifier =
            load_classifier(&config.model_path).context("failed to load classifier model")?;
        let airports = AirportTable::load(&config.airports_path)
            .context("failed to load airport table")?;

        log::info!(
            "prediction context ready: {} model, {} airports",
            classifier.kind(),
            airports.len()
        );

        Ok(Self {
            mappings,
            classifier,
            airports,
        })
    }

    /// Load with an explicit set of paths; used by tests and tools.
    pub fn load_from_paths(mappings: &Path, model: &Path, airports: &Path) -> Result<Self> {
        let mappings =
            CategoryMappings::load(mappings).context("failed to load category mappings")?;
        let classifier = load_classifier(model).context("failed to load classifier model")?;
        let airports = AirportTable::load(airports).context("failed to load airport table")?;
        Ok(Self {
            mappings,
            classifier,
            airports,
        })
    }

    /// Assemble a context from already-loaded parts.
    pub fn new(
        mappings: CategoryMappings,
        classifier: Box<dyn DelayClassifier>,
        airports: AirportTable,
    ) -> Self {
        Self {
            mappings,
            classifier,
            airports,
        }
    }
}

/// Result of a prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    /// Scored itineraries, in the order the search returned them.
    pub flights: Vec<FlightPrediction>,
    /// Count of categorical fields that fell outside the mapping table.
    pub unseen_categories: usize,
}

/// Search, normalize and classify the flights for a query.
///
/// Fails as a whole batch on the first malformed record; there is no
/// partial success.
pub async fn predict_flights(
    ctx: &PredictionContext,
    search: &dyn FlightSearch,
    query: &FlightQuery,
) -> Result<PredictionOutcome> {
    let offers = search
        .search(query)
        .await
        .context("flight search failed")?;
    let records = join_geography(&offers, query, &ctx.airports);

    let batch = features::normalize(&records, &ctx.mappings)
        .context("failed to normalize flight records")?;
    let predictions = ctx
        .classifier
        .predict(&batch.rows)
        .context("classifier prediction failed")?;
    let flight_keys = features::recover_flight_numbers(&batch.rows, &ctx.mappings)
        .context("failed to recover flight identifiers")?;

    if batch.unseen_categories > 0 {
        log::warn!(
            "{} categorical fields outside the mapping table for {} -> {}",
            batch.unseen_categories,
            query.origin,
            query.dest
        );
    }

    let flights = records
        .iter()
        .zip(flight_keys)
        .zip(predictions)
        .map(|((record, flight), delayed)| FlightPrediction {
            flight,
            airline: record.airline.clone(),
            origin: record.origin.clone(),
            dest: record.dest.clone(),
            departure_date: record.departure_date.clone(),
            departure_time: record.departure_time.clone(),
            arrival_time: record.arrival_time.clone(),
            air_time: record.air_time,
            prediction: DelayLabel::from(delayed),
        })
        .collect();

    Ok(PredictionOutcome {
        flights,
        unseen_categories: batch.unseen_categories,
    })
}

/// Attach state names and coordinates to each offer's endpoints.
///
/// Airports missing from the table join to absent fields, which the
/// normalizer encodes with the -1 sentinel; a thin table degrades
/// predictions instead of failing them.
pub fn join_geography(
    offers: &[FlightOffer],
    query: &FlightQuery,
    airports: &AirportTable,
) -> Vec<RawFlightRecord> {
    let origin = airports.get(&query.origin);
    let dest = airports.get(&query.dest);
    let departure_date = query.date.format("%Y-%m-%d").to_string();

    offers
        .iter()
        .map(|offer| RawFlightRecord {
            origin: query.origin.clone(),
            dest: query.dest.clone(),
            departure_date: departure_date.clone(),
            departure_time: offer.departure_time.clone().unwrap_or_default(),
            arrival_time: offer.arrival_time.clone().unwrap_or_default(),
            flight_info: offer.flight_number.clone().unwrap_or_default(),
            airline: offer.airline.clone(),
            airplane: offer.airplane.clone(),
            air_time: offer.duration_min.unwrap_or(0.0),
            origin_state: origin.map(|a| a.region_name.clone()),
            dest_state: dest.map(|a| a.region_name.clone()),
            origin_latitude: origin.map(|a| a.latitude),
            origin_longitude: origin.map(|a| a.longitude),
            dest_latitude: dest.map(|a| a.latitude),
            dest_longitude: dest.map(|a| a.longitude),
        })
        .collect()
}
