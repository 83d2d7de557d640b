//! The feature normalizer.
//!
//! Deterministically converts a batch of raw flight records into the fixed
//! twelve-column numeric matrix required by the classifier. Output
//! cardinality and row order match the input exactly, so callers can
//! re-associate predictions with records by position or by the recovered
//! carrier/flight-number key.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::features::error::{NormalizeError, NormalizeResult};
use crate::features::mapping::{CategoryMappings, UNSEEN_CATEGORY};
use crate::models::{FeatureRow, RawFlightRecord};

/// Accepted departure date layouts.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Accepted clock-time layouts. The search API formats timestamps
/// inconsistently: bare clock times, full timestamps, and 12-hour forms
/// all occur.
const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%I:%M %p"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];

/// A normalized batch: one feature row per input record, input order
/// preserved, plus the number of categorical fields that encoded to the
/// -1 sentinel (surfaced for observability).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBatch {
    /// Feature rows, same cardinality and order as the input records.
    pub rows: Vec<FeatureRow>,
    /// Count of categorical fields across the batch that were absent from
    /// the mapping table.
    pub unseen_categories: usize,
}

/// Normalize a batch of raw flight records.
///
/// Any malformed record fails the whole batch; there is no per-row
/// isolation.
///
/// # Errors
/// - [`NormalizeError::MalformedField`] when a combined carrier/flight
///   field does not split into a carrier code and a numeric flight number
/// - [`NormalizeError::UnparsableDateTime`] when a date or clock-time
///   field cannot be parsed
pub fn normalize(
    records: &[RawFlightRecord],
    mappings: &CategoryMappings,
) -> NormalizeResult<NormalizedBatch> {
    let mut rows = Vec::with_capacity(records.len());
    let mut unseen = 0usize;

    for record in records {
        rows.push(normalize_record(record, mappings, &mut unseen)?);
    }

    if unseen > 0 {
        log::warn!(
            "normalized {} records with {} categorical fields outside the mapping table",
            records.len(),
            unseen
        );
    }

    Ok(NormalizedBatch {
        rows,
        unseen_categories: unseen,
    })
}

/// Recover `"<carrier> <number>"` identifiers from normalized rows.
///
/// Reverses the carrier encoding through the inverse mapping and rejoins
/// it with the flight number, matching the combined-field format the
/// normalizer split. Output order matches the input rows.
///
/// # Errors
/// [`NormalizeError::UnknownCategoryCode`] when a row's carrier code has
/// no inverse; in particular, carriers that encoded to the -1 sentinel
/// cannot be recovered.
pub fn recover_flight_numbers(
    rows: &[FeatureRow],
    mappings: &CategoryMappings,
) -> NormalizeResult<Vec<String>> {
    rows.iter()
        .map(|row| {
            let carrier = mappings.carrier_for_code(row.carrier)?;
            Ok(format!("{} {}", carrier, row.flight_number as i64))
        })
        .collect()
}

fn normalize_record(
    record: &RawFlightRecord,
    mappings: &CategoryMappings,
    unseen: &mut usize,
) -> NormalizeResult<FeatureRow> {
    // Step 1: split "DL 1234" into carrier text and numeric flight number.
    let (carrier, flight_number) = split_flight_info(&record.flight_info)?;

    // Step 2: calendar features. Day-of-week is 1-7 with Monday = 1, not
    // the 0-based weekday index.
    let date = parse_date("departure date", &record.departure_date)?;
    let month = date.month();
    let day_of_month = date.day();
    let day_of_week = date.weekday().number_from_monday();

    // Step 3: departure hour bucket, 24 one-hour buckets.
    let departure = parse_clock_time("departure time", &record.departure_time)?;
    let dep_time_blk = hour_block(departure.hour());

    // Step 4: arrival time as hour*100 + minute.
    let arrival = parse_clock_time("arrival time", &record.arrival_time)?;
    let arr_time = (arrival.hour() * 100 + arrival.minute()) as f64;

    // Steps 5-7: only the twelve target features survive, encoded and in
    // the fixed column order. (Step 5, dropping the redundant source
    // columns, is structural: FeatureRow has no field for them.)
    let row = FeatureRow {
        origin: count_unseen(mappings.encode_origin(&record.origin), unseen),
        dest: count_unseen(mappings.encode_dest(&record.dest), unseen),
        month,
        air_time: record.air_time,
        carrier: count_unseen(mappings.encode_carrier(&carrier), unseen),
        flight_number,
        dep_time_blk: count_unseen(mappings.encode_dep_time_blk(&dep_time_blk), unseen),
        arr_time,
        origin_state: count_unseen(
            mappings.encode_origin_state(record.origin_state.as_deref()),
            unseen,
        ),
        dest_state: count_unseen(
            mappings.encode_dest_state(record.dest_state.as_deref()),
            unseen,
        ),
        day_of_month,
        day_of_week,
    };

    Ok(row)
}

/// Split the combined carrier/flight-number field into its parts.
///
/// The field must contain exactly one separating space, a non-empty
/// carrier code, and a numeric flight number.
pub fn split_flight_info(value: &str) -> NormalizeResult<(String, f64)> {
    let parts: Vec<&str> = value.split(' ').collect();
    let [carrier, number] = parts.as_slice() else {
        return Err(NormalizeError::malformed_field(value));
    };
    if carrier.is_empty() || number.is_empty() {
        return Err(NormalizeError::malformed_field(value));
    }
    let flight_number: u32 = number
        .parse()
        .map_err(|_| NormalizeError::malformed_field(value))?;
    Ok((carrier.to_string(), flight_number as f64))
}

/// Format an hour as its departure-time bucket, e.g. 9 -> `"09:00-09:59"`.
pub fn hour_block(hour: u32) -> String {
    format!("{:02}:00-{:02}:59", hour, hour)
}

fn parse_date(field: &'static str, value: &str) -> NormalizeResult<NaiveDate> {
    let trimmed = value.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(NormalizeError::unparsable(field, value))
}

fn parse_clock_time(field: &'static str, value: &str) -> NormalizeResult<NaiveTime> {
    let trimmed = value.trim();
    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return Ok(time);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.time());
        }
    }
    Err(NormalizeError::unparsable(field, value))
}

fn count_unseen(code: i64, unseen: &mut usize) -> i64 {
    if code == UNSEEN_CATEGORY {
        *unseen += 1;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_mappings() -> CategoryMappings {
        let airports: HashMap<String, i64> =
            [("ATL".to_string(), 0), ("LAX".to_string(), 1)].into();
        let carriers: HashMap<String, i64> = [("AA".to_string(), 1), ("DL".to_string(), 4)].into();
        let blocks: HashMap<String, i64> = (0..24)
            .map(|h| (hour_block(h), h as i64))
            .collect();
        let states: HashMap<String, i64> =
            [("Georgia".to_string(), 0), ("California".to_string(), 1)].into();
        CategoryMappings::from_maps(
            airports.clone(),
            airports,
            carriers,
            blocks,
            states.clone(),
            states,
        )
    }

    fn test_record() -> RawFlightRecord {
        RawFlightRecord {
            origin: "ATL".to_string(),
            dest: "LAX".to_string(),
            departure_date: "2026-08-07".to_string(),
            departure_time: "09:15".to_string(),
            arrival_time: "14:05".to_string(),
            flight_info: "DL 1234".to_string(),
            airline: Some("Delta".to_string()),
            airplane: Some("Boeing 757".to_string()),
            air_time: 290.0,
            origin_state: Some("Georgia".to_string()),
            dest_state: Some("California".to_string()),
            origin_latitude: Some(33.64),
            origin_longitude: Some(-84.43),
            dest_latitude: Some(33.94),
            dest_longitude: Some(-118.41),
        }
    }

    #[test]
    fn test_split_flight_info() {
        let (carrier, number) = split_flight_info("DL 1234").unwrap();
        assert_eq!(carrier, "DL");
        assert_eq!(number, 1234.0);
    }

    #[test]
    fn test_split_rejects_zero_and_multiple_spaces() {
        assert!(matches!(
            split_flight_info("DL1234"),
            Err(NormalizeError::MalformedField { .. })
        ));
        assert!(matches!(
            split_flight_info("DL 1234 X"),
            Err(NormalizeError::MalformedField { .. })
        ));
        assert!(matches!(
            split_flight_info(" 1234"),
            Err(NormalizeError::MalformedField { .. })
        ));
        assert!(matches!(
            split_flight_info("DL "),
            Err(NormalizeError::MalformedField { .. })
        ));
    }

    #[test]
    fn test_split_rejects_non_numeric_flight_number() {
        assert!(matches!(
            split_flight_info("DL twelve"),
            Err(NormalizeError::MalformedField { .. })
        ));
    }

    #[test]
    fn test_normalize_single_record() {
        let batch = normalize(&[test_record()], &test_mappings()).unwrap();
        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.unseen_categories, 0);

        let row = &batch.rows[0];
        assert_eq!(row.origin, 0);
        assert_eq!(row.dest, 1);
        assert_eq!(row.month, 8);
        assert_eq!(row.air_time, 290.0);
        assert_eq!(row.carrier, 4);
        assert_eq!(row.flight_number, 1234.0);
        assert_eq!(row.dep_time_blk, 9);
        assert_eq!(row.arr_time, 1405.0);
        assert_eq!(row.origin_state, 0);
        assert_eq!(row.dest_state, 1);
        assert_eq!(row.day_of_month, 7);
        // 2026-08-07 is a Friday.
        assert_eq!(row.day_of_week, 5);
    }

    #[test]
    fn test_day_of_week_is_one_based_from_monday() {
        let mappings = test_mappings();
        // 2026-08-03 is a Monday.
        for (offset, expected) in (0u32..7).zip(1u32..=7) {
            let mut record = test_record();
            record.departure_date = format!("2026-08-{:02}", 3 + offset);
            let batch = normalize(&[record], &mappings).unwrap();
            assert_eq!(batch.rows[0].day_of_week, expected);
        }
    }

    #[test]
    fn test_midnight_arrival_encoding() {
        let mut record = test_record();
        record.arrival_time = "00:30".to_string();
        let batch = normalize(&[record], &test_mappings()).unwrap();
        assert_eq!(batch.rows[0].arr_time, 30.0);
    }

    #[test]
    fn test_hour_zero_bucket_is_inclusive() {
        let mut record = test_record();
        record.departure_time = "00:05".to_string();
        let batch = normalize(&[record], &test_mappings()).unwrap();
        assert_eq!(batch.rows[0].dep_time_blk, 0);
    }

    #[test]
    fn test_twelve_hour_and_datetime_forms_parse() {
        let mut record = test_record();
        record.departure_time = "9:15 AM".to_string();
        record.arrival_time = "2026-08-07 14:05".to_string();
        let batch = normalize(&[record], &test_mappings()).unwrap();
        assert_eq!(batch.rows[0].dep_time_blk, 9);
        assert_eq!(batch.rows[0].arr_time, 1405.0);
    }

    #[test]
    fn test_unseen_categories_count_and_sentinel() {
        let mut record = test_record();
        record.origin = "JFK".to_string();
        record.dest_state = None;
        record.flight_info = "ZZ 99".to_string();

        let batch = normalize(&[record], &test_mappings()).unwrap();
        let row = &batch.rows[0];
        assert_eq!(row.origin, -1);
        assert_eq!(row.dest_state, -1);
        assert_eq!(row.carrier, -1);
        assert_eq!(batch.unseen_categories, 3);
    }

    #[test]
    fn test_bad_date_fails_the_whole_batch() {
        let good = test_record();
        let mut bad = test_record();
        bad.departure_date = "next tuesday".to_string();

        let err = normalize(&[good, bad], &test_mappings()).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::UnparsableDateTime {
                field: "departure date",
                ..
            }
        ));
    }

    #[test]
    fn test_bad_clock_time_is_unparsable() {
        let mut record = test_record();
        record.arrival_time = "around noon".to_string();
        let err = normalize(&[record], &test_mappings()).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::UnparsableDateTime {
                field: "arrival time",
                ..
            }
        ));
    }

    #[test]
    fn test_order_preserved_across_batch() {
        let mut second = test_record();
        second.flight_info = "AA 100".to_string();
        let batch = normalize(&[test_record(), second], &test_mappings()).unwrap();
        assert_eq!(batch.rows.len(), 2);
        assert_eq!(batch.rows[0].flight_number, 1234.0);
        assert_eq!(batch.rows[1].flight_number, 100.0);
    }

    #[test]
    fn test_recover_flight_numbers_roundtrip() {
        let mut second = test_record();
        second.flight_info = "AA 100".to_string();
        let mappings = test_mappings();
        let batch = normalize(&[test_record(), second], &mappings).unwrap();

        let recovered = recover_flight_numbers(&batch.rows, &mappings).unwrap();
        assert_eq!(recovered, vec!["DL 1234".to_string(), "AA 100".to_string()]);
    }

    #[test]
    fn test_recover_fails_for_sentinel_carrier() {
        let mut record = test_record();
        record.flight_info = "ZZ 99".to_string();
        let mappings = test_mappings();
        let batch = normalize(&[record], &mappings).unwrap();

        let err = recover_flight_numbers(&batch.rows, &mappings).unwrap_err();
        assert!(matches!(err, NormalizeError::UnknownCategoryCode { .. }));
    }
}
