//! Category mapping table.
//!
//! A fixed mapping from the six categorical feature columns to small
//! non-negative integers, loaded once from a JSON file and immutable at
//! runtime. Category values absent from the table encode to
//! [`UNSEEN_CATEGORY`] rather than failing, so unseen airports, carriers
//! or states degrade gracefully instead of blocking inference.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::features::error::{NormalizeError, NormalizeResult};

/// Sentinel for categorical values not present in the mapping table.
pub const UNSEEN_CATEGORY: i64 = -1;

/// The six categorical maps, keyed by training-data column name in the
/// source file.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMappings {
    #[serde(rename = "Origin")]
    origin: HashMap<String, i64>,
    #[serde(rename = "Dest")]
    dest: HashMap<String, i64>,
    #[serde(rename = "Reporting_Airline")]
    carrier: HashMap<String, i64>,
    #[serde(rename = "DepTimeBlk")]
    dep_time_blk: HashMap<String, i64>,
    #[serde(rename = "OriginStateName")]
    origin_state: HashMap<String, i64>,
    #[serde(rename = "DestStateName")]
    dest_state: HashMap<String, i64>,
    /// Inverse of `carrier`, built at load time for prediction re-join.
    #[serde(skip)]
    carrier_inverse: HashMap<i64, String>,
}

impl CategoryMappings {
    /// Load the mapping table from a JSON file.
    ///
    /// # Errors
    /// [`NormalizeError::MissingMappingFile`] when the file is absent,
    /// unreadable, or not the expected JSON shape.
    pub fn load(path: &Path) -> NormalizeResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| NormalizeError::MissingMappingFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&text).map_err(|reason| NormalizeError::MissingMappingFile {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse the mapping table from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, String> {
        let mut mappings: CategoryMappings =
            serde_json::from_str(text).map_err(|e| e.to_string())?;
        mappings.rebuild_inverse();
        Ok(mappings)
    }

    /// Build a mapping table from already-parsed maps. Used by tests and
    /// by callers that assemble mappings programmatically.
    #[allow(clippy::too_many_arguments)]
    pub fn from_maps(
        origin: HashMap<String, i64>,
        dest: HashMap<String, i64>,
        carrier: HashMap<String, i64>,
        dep_time_blk: HashMap<String, i64>,
        origin_state: HashMap<String, i64>,
        dest_state: HashMap<String, i64>,
    ) -> Self {
        let mut mappings = Self {
            origin,
            dest,
            carrier,
            dep_time_blk,
            origin_state,
            dest_state,
            carrier_inverse: HashMap::new(),
        };
        mappings.rebuild_inverse();
        mappings
    }

    fn rebuild_inverse(&mut self) {
        self.carrier_inverse = self
            .carrier
            .iter()
            .map(|(code, &value)| (value, code.clone()))
            .collect();
    }

    /// Encode an origin airport code.
    pub fn encode_origin(&self, value: &str) -> i64 {
        encode(&self.origin, value)
    }

    /// Encode a destination airport code.
    pub fn encode_dest(&self, value: &str) -> i64 {
        encode(&self.dest, value)
    }

    /// Encode a carrier code.
    pub fn encode_carrier(&self, value: &str) -> i64 {
        encode(&self.carrier, value)
    }

    /// Encode a departure-time bucket (`HH:00-HH:59`).
    pub fn encode_dep_time_blk(&self, value: &str) -> i64 {
        encode(&self.dep_time_blk, value)
    }

    /// Encode an origin state name; absent states encode to the sentinel.
    pub fn encode_origin_state(&self, value: Option<&str>) -> i64 {
        value.map_or(UNSEEN_CATEGORY, |v| encode(&self.origin_state, v))
    }

    /// Encode a destination state name; absent states encode to the sentinel.
    pub fn encode_dest_state(&self, value: Option<&str>) -> i64 {
        value.map_or(UNSEEN_CATEGORY, |v| encode(&self.dest_state, v))
    }

    /// Reverse-look-up an encoded carrier back to its text code.
    ///
    /// # Errors
    /// [`NormalizeError::UnknownCategoryCode`] when no carrier maps to
    /// `code`. The sentinel value never has an inverse.
    pub fn carrier_for_code(&self, code: i64) -> NormalizeResult<&str> {
        self.carrier_inverse
            .get(&code)
            .map(String::as_str)
            .ok_or(NormalizeError::UnknownCategoryCode { code })
    }

    /// Carrier codes present in the forward table.
    pub fn carriers(&self) -> impl Iterator<Item = &str> {
        self.carrier.keys().map(String::as_str)
    }
}

fn encode(map: &HashMap<String, i64>, value: &str) -> i64 {
    map.get(value).copied().unwrap_or(UNSEEN_CATEGORY)
}
