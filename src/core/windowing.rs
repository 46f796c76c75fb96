use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::CompositeDataPoint;
use crate::error::{ChartError, ChartResult};

/// Chronological series plus the trailing slice currently on screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSelection {
    chronological: Vec<CompositeDataPoint>,
    visible_start: usize,
    num_hours_shown: usize,
}

impl WindowSelection {
    /// Full series, oldest first.
    #[must_use]
    pub fn chronological(&self) -> &[CompositeDataPoint] {
        &self.chronological
    }

    /// Trailing `min(num_hours_shown, len)` points, oldest first. Never empty.
    #[must_use]
    pub fn visible(&self) -> &[CompositeDataPoint] {
        &self.chronological[self.visible_start..]
    }

    #[must_use]
    pub fn num_hours_shown(&self) -> usize {
        self.num_hours_shown
    }

    /// `true` when fewer points exist than the requested window.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.visible().len() < self.num_hours_shown
    }

    #[must_use]
    pub fn min_date(&self) -> DateTime<Utc> {
        self.visible()[0].date
    }

    #[must_use]
    pub fn max_date(&self) -> DateTime<Utc> {
        self.visible()[self.visible().len() - 1].date
    }

    /// Lowest and highest priced visible points.
    #[must_use]
    pub fn extremes(&self) -> PriceExtremes {
        let visible = self.visible();
        // `visible` is non-empty by construction.
        let mut min = visible[0];
        let mut max = visible[0];
        for point in &visible[1..] {
            if point.price < min.price {
                min = *point;
            }
            if point.price > max.price {
                max = *point;
            }
        }
        PriceExtremes { min, max }
    }
}

/// Visible min/max price points; ties resolve to the earliest point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceExtremes {
    pub min: CompositeDataPoint,
    pub max: CompositeDataPoint,
}

impl PriceExtremes {
    #[must_use]
    pub fn is_flat(self) -> bool {
        self.min.price == self.max.price
    }
}

/// Orders a newest-first series chronologically and selects the trailing window.
///
/// Input that is not strictly newest-first is still ordered by date; points
/// sharing a date keep their reversed input order.
pub fn select_window(
    series: &[CompositeDataPoint],
    num_hours_shown: usize,
) -> ChartResult<WindowSelection> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    if num_hours_shown == 0 {
        return Err(ChartError::InvalidWindow {
            hours: num_hours_shown,
        });
    }

    let mut chronological: Vec<CompositeDataPoint> = series.iter().rev().copied().collect();
    chronological.sort_by_key(|point| point.date);

    let visible_len = num_hours_shown.min(chronological.len());
    let visible_start = chronological.len() - visible_len;

    Ok(WindowSelection {
        chronological,
        visible_start,
        num_hours_shown,
    })
}
