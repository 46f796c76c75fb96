use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Tuning controls for fitting the price axis to the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScaleTuning {
    /// Pixels kept free above the max price and below the min price.
    pub padding_px: f64,
    /// Domain span substituted when every visible price is equal.
    pub min_span_absolute: f64,
}

impl Default for PriceScaleTuning {
    fn default() -> Self {
        Self {
            padding_px: 50.0,
            min_span_absolute: 1.0,
        }
    }
}

impl PriceScaleTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if !self.padding_px.is_finite() || self.padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "price scale padding must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "price scale min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Price axis mapped so that higher prices sit higher on screen.
///
/// The domain is stored as `[max, min]` against the ascending pixel range
/// `[padding, bounded_height - padding]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScale {
    linear: LinearScale,
    padding_px: f64,
}

impl PriceScale {
    pub fn fit(
        min_price: f64,
        max_price: f64,
        bounded_height: f64,
        tuning: PriceScaleTuning,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        if !min_price.is_finite() || !max_price.is_finite() {
            return Err(ChartError::InvalidData(
                "price extremes must be finite".to_owned(),
            ));
        }
        if !bounded_height.is_finite() || bounded_height <= 0.0 {
            return Err(ChartError::InvalidDimensions {
                width: 0.0,
                height: bounded_height,
            });
        }

        let (low, high) = normalize_price_range(min_price, max_price, tuning.min_span_absolute);

        // Keep the range ascending on short plots instead of flipping the axis.
        let padding_px = if 2.0 * tuning.padding_px < bounded_height {
            tuning.padding_px
        } else {
            bounded_height / 4.0
        };

        let linear = LinearScale::new((high, low), (padding_px, bounded_height - padding_px))?;
        Ok(Self { linear, padding_px })
    }

    /// Domain as `(max, min)`.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    /// Padding actually applied, which may be reduced on short plots.
    #[must_use]
    pub fn padding_px(self) -> f64 {
        self.padding_px
    }

    pub fn price_to_pixel(self, price: f64) -> ChartResult<f64> {
        self.linear.apply(price)
    }

    pub fn pixel_to_price(self, pixel: f64) -> ChartResult<f64> {
        self.linear.invert(pixel)
    }
}

fn normalize_price_range(min_price: f64, max_price: f64, min_span: f64) -> (f64, f64) {
    let (low, high) = if min_price <= max_price {
        (min_price, max_price)
    } else {
        (max_price, min_price)
    };

    if low == high {
        let half = min_span / 2.0;
        return (low - half, high + half);
    }

    (low, high)
}
