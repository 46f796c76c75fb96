use chrono::{DateTime, Utc};

use crate::core::CompositeDataPoint;
use crate::core::primitives::{add_hours, floor_to_hour};

/// Finds the price of the hour bucket containing `query`.
///
/// Scans `chronological` for the first point dated within
/// `[floor_hour(query), floor_hour(query) + 1h]`, both ends inclusive.
/// Returns `None` when no bucket matches; display code treats that as `0`.
#[must_use]
pub fn find_price_at(chronological: &[CompositeDataPoint], query: DateTime<Utc>) -> Option<f64> {
    find_point_at(chronological, query).map(|point| point.price)
}

#[must_use]
pub fn find_point_at(
    chronological: &[CompositeDataPoint],
    query: DateTime<Utc>,
) -> Option<CompositeDataPoint> {
    let lower = floor_to_hour(query);
    let upper = add_hours(lower, 1).ok()?;

    chronological
        .iter()
        .find(|point| lower <= point.date && point.date <= upper)
        .copied()
}
