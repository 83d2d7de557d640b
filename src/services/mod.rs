//! Service layer: orchestration of search, join, normalization,
//! classification and export.

pub mod export;
pub mod prediction;

pub use export::predictions_to_csv;
pub use prediction::{predict_flights, PredictionContext, PredictionOutcome};
