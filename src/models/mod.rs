//! Domain model types shared across the crate.
//!
//! The types here mirror the lifecycle of a prediction request: a
//! [`FlightQuery`] goes out to the search API, each returned itinerary leg
//! becomes a [`RawFlightRecord`] after the geographic join, the normalizer
//! turns records into [`FeatureRow`]s, and the classifier's output comes
//! back as a [`DelayLabel`] attached to a [`FlightPrediction`].

pub mod features;
pub mod flight;

pub use features::{FeatureRow, FEATURE_COLUMNS};
pub use flight::{DelayLabel, FlightPrediction, FlightQuery, RawFlightRecord};
