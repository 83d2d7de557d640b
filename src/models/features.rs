//! The normalized feature row consumed by the classifier.

use serde::{Deserialize, Serialize};

/// Feature columns in the exact order the classifier was fit on.
///
/// The names are the US DOT on-time performance dataset columns the model
/// was trained against. Model files carry their own `feature_names` list
/// and are validated against this constant at load time; the predict path
/// itself has no schema checking, so any drift here is a silent
/// correctness bug.
pub const FEATURE_COLUMNS: [&str; 12] = [
    "Origin",
    "Dest",
    "Month",
    "AirTime",
    "Reporting_Airline",
    "Flight_Number_Reporting_Airline",
    "DepTimeBlk",
    "ArrTime",
    "OriginStateName",
    "DestStateName",
    "DayofMonth",
    "DayOfWeek",
];

/// One normalized feature row.
///
/// Categorical fields hold the integer assigned by the category mapping
/// table, or `-1` for values the table has never seen. `flight_number` and
/// `arr_time` are floats for schema uniformity with the training data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    /// Encoded origin airport code.
    pub origin: i64,
    /// Encoded destination airport code.
    pub dest: i64,
    /// Month of the departure date, 1-12.
    pub month: u32,
    /// Flight duration in minutes.
    pub air_time: f64,
    /// Encoded carrier code.
    pub carrier: i64,
    /// Flight number.
    pub flight_number: f64,
    /// Encoded departure-hour bucket (`HH:00-HH:59`).
    pub dep_time_blk: i64,
    /// Arrival time encoded as `hour * 100 + minute`.
    pub arr_time: f64,
    /// Encoded origin state name.
    pub origin_state: i64,
    /// Encoded destination state name.
    pub dest_state: i64,
    /// Day of month, 1-31.
    pub day_of_month: u32,
    /// Day of week, 1-7 with Monday = 1.
    pub day_of_week: u32,
}

impl FeatureRow {
    /// The row as a numeric vector in [`FEATURE_COLUMNS`] order.
    pub fn as_features(&self) -> [f64; 12] {
        [
            self.origin as f64,
            self.dest as f64,
            self.month as f64,
            self.air_time,
            self.carrier as f64,
            self.flight_number,
            self.dep_time_blk as f64,
            self.arr_time,
            self.origin_state as f64,
            self.dest_state as f64,
            self.day_of_month as f64,
            self.day_of_week as f64,
        ]
    }
}
