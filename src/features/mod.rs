//! Feature normalization pipeline.
//!
//! Converts raw, heterogeneous flight records into the fixed twelve-column
//! numeric layout the stored classifier expects:
//!
//! 1. split the combined carrier/flight-number field,
//! 2. derive calendar features from the departure date,
//! 3. bucket the departure hour,
//! 4. encode the arrival time numerically,
//! 5. drop redundant source columns,
//! 6. encode categoricals through the mapping table (-1 for unseen),
//! 7. emit fields in the fixed column order.
//!
//! The whole batch fails on the first bad record; there is no per-row
//! isolation.

pub mod error;
pub mod mapping;
pub mod normalizer;

pub use error::NormalizeError;
pub use mapping::{CategoryMappings, UNSEEN_CATEGORY};
pub use normalizer::{normalize, recover_flight_numbers, NormalizedBatch};
