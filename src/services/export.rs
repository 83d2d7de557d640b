//! CSV export of prediction results.

use anyhow::{Context, Result};

use crate::models::FlightPrediction;

/// Render predictions as a CSV document with a header row.
///
/// Row order matches the input; labels render as "Delayed" / "On Time".
pub fn predictions_to_csv(predictions: &[FlightPrediction]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for prediction in predictions {
        writer
            .serialize(prediction)
            .context("failed to serialize prediction row")?;
    }
    let bytes = writer
        .into_inner()
        .context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DelayLabel;

    fn sample_prediction(flight: &str, prediction: DelayLabel) -> FlightPrediction {
        FlightPrediction {
            flight: flight.to_string(),
            airline: Some("Delta".to_string()),
            origin: "ATL".to_string(),
            dest: "LAX".to_string(),
            departure_date: "2026-08-07".to_string(),
            departure_time: "09:15".to_string(),
            arrival_time: "14:05".to_string(),
            air_time: 290.0,
            prediction,
        }
    }

    #[test]
    fn test_csv_has_header_and_one_line_per_row() {
        let csv = predictions_to_csv(&[
            sample_prediction("DL 1234", DelayLabel::Delayed),
            sample_prediction("AA 100", DelayLabel::OnTime),
        ])
        .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("flight,airline,origin,dest"));
        assert!(lines[1].contains("DL 1234"));
        assert!(lines[1].contains("Delayed"));
        assert!(lines[2].contains("On Time"));
    }

    #[test]
    fn test_empty_input_yields_empty_document() {
        let csv = predictions_to_csv(&[]).unwrap();
        assert!(csv.is_empty());
    }
}
