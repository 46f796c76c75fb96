use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub const SECONDS_PER_HOUR: i64 = 3_600;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Converts fractional unix seconds back to a timestamp at millisecond precision.
pub fn unix_seconds_to_datetime(seconds: f64) -> ChartResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(ChartError::InvalidData(
            "timestamp seconds must be finite".to_owned(),
        ));
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(ChartError::InvalidData(
            "timestamp seconds out of range".to_owned(),
        ));
    }
    DateTime::from_timestamp_millis(millis as i64)
        .ok_or_else(|| ChartError::InvalidData("timestamp seconds out of range".to_owned()))
}

/// Returns a new timestamp shifted by a signed number of hours.
///
/// Fails with `InvalidData` when the shift leaves chrono's representable range.
pub fn add_hours(time: DateTime<Utc>, hours: i64) -> ChartResult<DateTime<Utc>> {
    TimeDelta::try_hours(hours)
        .and_then(|delta| time.checked_add_signed(delta))
        .ok_or_else(|| ChartError::InvalidData(format!("shifting by {hours} hours overflows")))
}

/// Returns the start of the hour bucket containing `time`.
///
/// Flooring happens on the UTC timeline, so sub-hour zone offsets do not
/// shift bucket boundaries.
#[must_use]
pub fn floor_to_hour(time: DateTime<Utc>) -> DateTime<Utc> {
    let seconds = time.timestamp();
    let floored = seconds.div_euclid(SECONDS_PER_HOUR) * SECONDS_PER_HOUR;
    // Flooring moves toward the epoch by less than one hour; the result is
    // always representable when the input is.
    DateTime::from_timestamp(floored, 0).unwrap_or(time)
}
