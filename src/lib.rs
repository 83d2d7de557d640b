//! # Delaycast
//!
//! Flight delay prediction backend.
//!
//! This crate takes an origin airport, a destination airport and a date,
//! queries a third-party flight-search API, joins the offered itineraries
//! with a static airport-coordinates table, feeds the joined records
//! through a pre-trained classifier, and serves the scored flights as
//! JSON or a CSV download behind a small web form.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: domain types - queries, raw records, feature rows, labels
//! - [`features`]: the feature normalization pipeline and category mappings
//! - [`classifier`]: the delay classifier interface and model adapters
//! - [`airports`]: the static airport coordinates table
//! - [`search`]: the flight search client interface
//! - [`services`]: orchestration of the prediction control flow
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! The normalization core is synchronous and CPU-only; the only await
//! points are the outbound search call and the HTTP plumbing. Everything
//! loaded at startup (mapping table, model, airport table) is immutable
//! afterwards and safely shared across request tasks.

pub mod airports;
pub mod classifier;
pub mod config;
pub mod features;
pub mod models;
pub mod search;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
