use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// One hour of tariff input as delivered by the upstream feed.
///
/// `vat` is a multiplicative factor (`1.25` for 25%), the other fields are
/// additive cost components in the feed's price unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataPoint {
    pub date: DateTime<Utc>,
    pub market_price: f64,
    pub electricity_tax: f64,
    pub net_tarif: f64,
    pub vat: f64,
}

impl RawDataPoint {
    #[must_use]
    pub fn new(
        date: DateTime<Utc>,
        market_price: f64,
        electricity_tax: f64,
        net_tarif: f64,
        vat: f64,
    ) -> Self {
        Self {
            date,
            market_price,
            electricity_tax,
            net_tarif,
            vat,
        }
    }

    pub fn from_decimal(
        date: DateTime<Utc>,
        market_price: Decimal,
        electricity_tax: Decimal,
        net_tarif: Decimal,
        vat: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self {
            date,
            market_price: decimal_to_f64(market_price, "market price")?,
            electricity_tax: decimal_to_f64(electricity_tax, "electricity tax")?,
            net_tarif: decimal_to_f64(net_tarif, "net tariff")?,
            vat: decimal_to_f64(vat, "vat")?,
        })
    }
}

/// Hourly price after combining the enabled cost components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeDataPoint {
    pub date: DateTime<Utc>,
    pub price: f64,
}

impl CompositeDataPoint {
    #[must_use]
    pub fn new(date: DateTime<Utc>, price: f64) -> Self {
        Self { date, price }
    }
}

/// Space reserved around the bound (plot) area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for ChartMargins {
    fn default() -> Self {
        Self {
            top: 35.0,
            right: 10.0,
            bottom: 10.0,
            left: 30.0,
        }
    }
}

impl ChartMargins {
    pub fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Layout reported by the container observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub bounded_width: f64,
    pub bounded_height: f64,
    pub margins: ChartMargins,
}

impl ChartDimensions {
    /// Derives bounded sizes from a container size, never going below zero.
    pub fn from_container(width: f64, height: f64, margins: ChartMargins) -> ChartResult<Self> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidDimensions { width, height });
        }
        let margins = margins.validate()?;

        Ok(Self {
            width,
            height,
            bounded_width: (width - margins.left - margins.right).max(0.0),
            bounded_height: (height - margins.top - margins.bottom).max(0.0),
            margins,
        })
    }

    pub fn validate(self) -> ChartResult<Self> {
        let sizes = [
            self.width,
            self.height,
            self.bounded_width,
            self.bounded_height,
        ];
        if sizes.iter().any(|value| !value.is_finite() || *value < 0.0) {
            return Err(ChartError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        self.margins.validate()?;
        Ok(self)
    }

    /// `true` when the bound area has a drawable, non-zero extent.
    #[must_use]
    pub fn has_drawable_area(self) -> bool {
        self.bounded_width > 0.0 && self.bounded_height > 0.0
    }

    /// Default client-space box of the bound area when the container sits at the origin.
    #[must_use]
    pub fn default_bound_box(self) -> BoundingBox {
        BoundingBox::new(
            self.margins.left,
            self.margins.left + self.bounded_width,
        )
    }
}

/// Horizontal client-space extent of the bound area, as read at layout time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn contains_x(self, client_x: f64) -> bool {
        client_x >= self.left && client_x <= self.right
    }
}
