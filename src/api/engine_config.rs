use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{ChartMargins, PriceScaleTuning, ToggleSet};
use crate::error::{ChartError, ChartResult};

use super::readout::validate_time_label_format;

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can ship chart setup as JSON; every
/// field falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default)]
    pub margins: ChartMargins,
    #[serde(default = "default_num_hours_shown")]
    pub num_hours_shown: usize,
    #[serde(default)]
    pub toggles: ToggleSet,
    #[serde(default = "default_bound_padding_px")]
    pub bound_padding_px: f64,
    #[serde(default = "default_min_price_span")]
    pub min_price_span: f64,
    #[serde(default = "default_clamp_margin_px")]
    pub scrub_clamp_margin_px: f64,
    #[serde(default = "default_clamp_margin_px")]
    pub label_clamp_margin_px: f64,
    #[serde(default = "default_label_offset_px")]
    pub label_offset_px: f64,
    #[serde(default = "default_clock_interval_ms")]
    pub clock_interval_ms: u64,
    #[serde(default = "default_price_label_prefix")]
    pub price_label_prefix: String,
    #[serde(default = "default_readout_unit")]
    pub readout_unit: String,
    #[serde(default = "default_time_label_format")]
    pub time_label_format: String,
    #[serde(default)]
    pub display_utc_offset_seconds: i32,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self {
            margins: ChartMargins::default(),
            num_hours_shown: default_num_hours_shown(),
            toggles: ToggleSet::default(),
            bound_padding_px: default_bound_padding_px(),
            min_price_span: default_min_price_span(),
            scrub_clamp_margin_px: default_clamp_margin_px(),
            label_clamp_margin_px: default_clamp_margin_px(),
            label_offset_px: default_label_offset_px(),
            clock_interval_ms: default_clock_interval_ms(),
            price_label_prefix: default_price_label_prefix(),
            readout_unit: default_readout_unit(),
            time_label_format: default_time_label_format(),
            display_utc_offset_seconds: 0,
        }
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn with_num_hours_shown(mut self, num_hours_shown: usize) -> Self {
        self.num_hours_shown = num_hours_shown;
        self
    }

    #[must_use]
    pub fn with_toggles(mut self, toggles: ToggleSet) -> Self {
        self.toggles = toggles;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_scrub_clamp_margin_px(mut self, margin_px: f64) -> Self {
        self.scrub_clamp_margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_bound_padding_px(mut self, padding_px: f64) -> Self {
        self.bound_padding_px = padding_px;
        self
    }

    #[must_use]
    pub fn with_clock_interval(mut self, interval: Duration) -> Self {
        self.clock_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_display_utc_offset_seconds(mut self, offset_seconds: i32) -> Self {
        self.display_utc_offset_seconds = offset_seconds;
        self
    }

    #[must_use]
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms)
    }

    #[must_use]
    pub fn price_scale_tuning(&self) -> PriceScaleTuning {
        PriceScaleTuning {
            padding_px: self.bound_padding_px,
            min_span_absolute: self.min_price_span,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.margins.validate()?;
        self.price_scale_tuning().validate()?;

        if self.num_hours_shown == 0 {
            return Err(ChartError::InvalidWindow {
                hours: self.num_hours_shown,
            });
        }
        for (name, value) in [
            ("scrub clamp margin", self.scrub_clamp_margin_px),
            ("label clamp margin", self.label_clamp_margin_px),
            ("label offset", self.label_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.clock_interval_ms == 0 {
            return Err(ChartError::InvalidData(
                "clock interval must be > 0".to_owned(),
            ));
        }
        if self.time_label_format.is_empty() {
            return Err(ChartError::InvalidData(
                "time label format must not be empty".to_owned(),
            ));
        }
        validate_time_label_format(&self.time_label_format)?;
        if chrono::FixedOffset::east_opt(self.display_utc_offset_seconds).is_none() {
            return Err(ChartError::InvalidData(
                "display utc offset must be within +/- 24 hours".to_owned(),
            ));
        }

        Ok(())
    }
}

fn default_num_hours_shown() -> usize {
    48
}

fn default_bound_padding_px() -> f64 {
    PriceScaleTuning::default().padding_px
}

fn default_min_price_span() -> f64 {
    PriceScaleTuning::default().min_span_absolute
}

fn default_clamp_margin_px() -> f64 {
    30.0
}

fn default_label_offset_px() -> f64 {
    20.0
}

fn default_clock_interval_ms() -> u64 {
    1_000
}

fn default_price_label_prefix() -> String {
    "ØRE".to_owned()
}

fn default_readout_unit() -> String {
    "øre kWh".to_owned()
}

fn default_time_label_format() -> String {
    "%-d. %b %H.%M".to_owned()
}
