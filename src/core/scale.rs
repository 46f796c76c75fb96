use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Affine mapping from a domain interval onto a pixel range interval.
///
/// Either interval may be descending; the mapping is monotonic and invertible
/// as long as both spans are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn apply(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
