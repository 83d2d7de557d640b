//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::features::NormalizeError;
use crate::search::SearchError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// The flight search upstream failed
    Upstream(String),
    /// Raw search data could not be normalized
    Unprocessable(String),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Upstream(msg) => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("UPSTREAM_ERROR", msg),
            ),
            AppError::Unprocessable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("NORMALIZATION_ERROR", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        // Classify by the root domain error so upstream outages and bad
        // upstream data do not masquerade as server bugs.
        if err.downcast_ref::<SearchError>().is_some() {
            AppError::Upstream(format!("{:#}", err))
        } else if err.downcast_ref::<NormalizeError>().is_some() {
            AppError::Unprocessable(format!("{:#}", err))
        } else {
            AppError::Internal(format!("{:#}", err))
        }
    }
}
