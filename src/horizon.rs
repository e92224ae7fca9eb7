//! Prediction-window date helpers.

use chrono::{Duration, Local, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar dates bounding a prediction window: the reference date and the
/// reference advanced by `prediction_hours`, both as `YYYY-MM-DD` strings.
/// Defaults to the current local time when no reference is given.
pub fn start_end_dates(prediction_hours: u32, start: Option<NaiveDateTime>) -> (String, String) {
    let reference = start.unwrap_or_else(|| Local::now().naive_local());
    let end = reference + Duration::hours(i64::from(prediction_hours));
    (
        reference.format(DATE_FORMAT).to_string(),
        end.format(DATE_FORMAT).to_string(),
    )
}
