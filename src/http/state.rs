//! Application state for the HTTP server.

use std::sync::Arc;

use crate::search::FlightSearch;
use crate::services::PredictionContext;

/// Shared application state passed to all handlers.
///
/// Everything here is loaded once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Mapping table, classifier and airport table.
    pub ctx: Arc<PredictionContext>,
    /// Flight search backend.
    pub search: Arc<dyn FlightSearch>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(ctx: Arc<PredictionContext>, search: Arc<dyn FlightSearch>) -> Self {
        Self { ctx, search }
    }
}
