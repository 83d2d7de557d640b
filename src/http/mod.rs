//! HTTP server module.
//!
//! An axum-based layer over the prediction service: a small HTML form, a
//! form-submit endpoint that answers with a CSV download, and a JSON API.
//! Request parsing, error mapping and response rendering live here; all
//! business logic stays in the service layer.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
