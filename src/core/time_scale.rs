use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::core::primitives::{add_hours, datetime_to_unix_seconds, unix_seconds_to_datetime};
use crate::error::{ChartError, ChartResult};

/// Time axis for a trailing window of hour buckets.
///
/// The domain ends one hour after the newest bucket start so the newest bucket
/// is drawn at full width, and begins `num_hours_shown - 1` hours before it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    begin: DateTime<Utc>,
    end: DateTime<Utc>,
    linear: LinearScale,
}

impl TimeScale {
    /// Builds the scale for a window ending at `max_date` over `[0, bounded_width]`.
    pub fn for_window(
        max_date: DateTime<Utc>,
        num_hours_shown: usize,
        bounded_width: f64,
    ) -> ChartResult<Self> {
        if num_hours_shown == 0 {
            return Err(ChartError::InvalidWindow {
                hours: num_hours_shown,
            });
        }
        let invalid_window = || ChartError::InvalidWindow {
            hours: num_hours_shown,
        };
        let hours_back = i64::try_from(num_hours_shown - 1).map_err(|_| invalid_window())?;

        let begin = add_hours(max_date, -hours_back).map_err(|_| invalid_window())?;
        let end = add_hours(max_date, 1).map_err(|_| invalid_window())?;
        Self::new(begin, end, bounded_width)
    }

    pub fn new(begin: DateTime<Utc>, end: DateTime<Utc>, bounded_width: f64) -> ChartResult<Self> {
        if !bounded_width.is_finite() || bounded_width <= 0.0 {
            return Err(ChartError::InvalidDimensions {
                width: bounded_width,
                height: 0.0,
            });
        }

        let linear = LinearScale::new(
            (datetime_to_unix_seconds(begin), datetime_to_unix_seconds(end)),
            (0.0, bounded_width),
        )?;
        Ok(Self { begin, end, linear })
    }

    #[must_use]
    pub fn domain(self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.begin, self.end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn time_to_pixel(self, time: DateTime<Utc>) -> ChartResult<f64> {
        self.linear.apply(datetime_to_unix_seconds(time))
    }

    /// Maps a horizontal pixel offset back to a timestamp (millisecond precision).
    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<DateTime<Utc>> {
        unix_seconds_to_datetime(self.linear.invert(pixel)?)
    }
}
