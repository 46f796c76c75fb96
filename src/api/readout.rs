use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// "Current price" header values for the query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Readout {
    /// Looked-up price, `None` when no hour bucket contains the query time.
    pub price: Option<f64>,
    /// Display value: the price rounded half-up, or `0` when unmatched.
    pub rounded_price: i64,
    pub unit: String,
    pub query_time: DateTime<Utc>,
    pub time_label: String,
    /// `true` when the query time comes from the live clock.
    pub is_live: bool,
}

/// Rounds half-up (toward positive infinity on ties), saturating at `i64` bounds.
#[must_use]
pub fn round_for_display(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    (value + 0.5).floor() as i64
}

pub fn validate_time_label_format(format: &str) -> ChartResult<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidData(format!(
            "invalid time label format `{format}`"
        )));
    }
    Ok(())
}

/// Formats `time` shifted by `utc_offset_seconds` with a strftime pattern.
///
/// Falls back to RFC 3339 if the offset or the pattern cannot be applied.
#[must_use]
pub fn format_time_label(time: DateTime<Utc>, format: &str, utc_offset_seconds: i32) -> String {
    let Some(offset) = FixedOffset::east_opt(utc_offset_seconds) else {
        return time.to_rfc3339();
    };
    let local = time.with_timezone(&offset);

    let mut label = String::new();
    if write!(label, "{}", local.format(format)).is_err() {
        return local.to_rfc3339();
    }
    label
}
