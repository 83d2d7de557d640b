//! HTTP handlers.
//!
//! Each handler parses the request, delegates to the prediction service,
//! and renders the outcome as HTML, CSV or JSON.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    Form, Json,
};

use super::dto::{HealthResponse, PredictionDto, PredictionsResponse, SearchRequest};
use super::error::AppError;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const INDEX_HTML: &str = include_str!("index.html");

// =============================================================================
// Form pages
// =============================================================================

/// GET /
///
/// The search form.
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /submit
///
/// Form submission: runs the search and prediction pipeline and answers
/// with a CSV attachment, mirroring the flight_results.csv download the
/// form promises.
pub async fn submit(
    State(state): State<AppState>,
    Form(request): Form<SearchRequest>,
) -> Result<Response, AppError> {
    let query = request.into_query().map_err(AppError::BadRequest)?;
    let outcome = services::predict_flights(&state.ctx, state.search.as_ref(), &query).await?;

    if outcome.flights.is_empty() {
        return Ok(Html("No flight information found.").into_response());
    }

    let csv = services::predictions_to_csv(&outcome.flights)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"flight_results.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

// =============================================================================
// JSON API
// =============================================================================

/// POST /v1/predictions
///
/// JSON body in, scored itineraries out.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> HandlerResult<PredictionsResponse> {
    let query = request.into_query().map_err(AppError::BadRequest)?;
    let outcome = services::predict_flights(&state.ctx, state.search.as_ref(), &query).await?;

    let flights: Vec<PredictionDto> = outcome.flights.into_iter().map(Into::into).collect();
    let total = flights.len();

    Ok(Json(PredictionsResponse {
        flights,
        total,
        unseen_categories: outcome.unseen_categories,
    }))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint reporting the loaded model and airport table.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        model: state.ctx.classifier.kind().to_string(),
        airports: state.ctx.airports.len(),
    }))
}
