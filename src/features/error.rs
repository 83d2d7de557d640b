//! Error types for the normalization pipeline.

use std::path::PathBuf;

/// Result type for normalization operations.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Errors raised while normalizing a record batch.
///
/// All variants are fatal for the batch being processed; the pipeline has
/// no per-row failure tolerance.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// The combined carrier/flight-number field did not split into a
    /// carrier code and a numeric flight number.
    #[error("malformed flight info field {value:?}: expected \"<carrier> <number>\"")]
    MalformedField { value: String },

    /// A date or clock-time field could not be parsed.
    #[error("unparsable {field} value {value:?}")]
    UnparsableDateTime { field: &'static str, value: String },

    /// The category mapping file is absent or unreadable.
    #[error("category mapping file {path:?} is missing or unreadable: {reason}")]
    MissingMappingFile { path: PathBuf, reason: String },

    /// An encoded carrier code has no inverse in the mapping table.
    ///
    /// Cannot happen when the forward mapping was used consistently and
    /// the carrier was present in the table; exists as a guard.
    #[error("no carrier code maps to encoded value {code}")]
    UnknownCategoryCode { code: i64 },
}

impl NormalizeError {
    pub fn malformed_field(value: impl Into<String>) -> Self {
        Self::MalformedField {
            value: value.into(),
        }
    }

    pub fn unparsable(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnparsableDateTime {
            field,
            value: value.into(),
        }
    }
}
