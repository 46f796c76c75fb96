use chrono::{DateTime, Utc};

use crate::clock::WallClock;
use crate::core::find_price_at;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::readout::{Readout, format_time_label, round_for_display};
use super::render_frame_builder::{ExtremeLabel, QueryMarker, extreme_label};
use super::ChartEngine;

impl<R: Renderer, C: WallClock> ChartEngine<R, C> {
    /// Highlighted time while dragging, otherwise the live clock.
    #[must_use]
    pub fn query_time(&self) -> DateTime<Utc> {
        self.highlight_time().unwrap_or_else(|| self.clock.current())
    }

    /// Composite price of the hour bucket containing `time`.
    #[must_use]
    pub fn price_at(&self, time: DateTime<Utc>) -> Option<f64> {
        find_price_at(self.derived.chronological(), time)
    }

    #[must_use]
    pub fn readout(&self) -> Readout {
        let highlight = self.highlight_time();
        let query_time = highlight.unwrap_or_else(|| self.clock.current());
        let price = self.price_at(query_time);

        Readout {
            price,
            rounded_price: price.map_or(0, round_for_display),
            unit: self.config.readout_unit.clone(),
            query_time,
            time_label: format_time_label(
                query_time,
                &self.config.time_label_format,
                self.config.display_utc_offset_seconds,
            ),
            is_live: highlight.is_none(),
        }
    }

    /// Highlight line and marker position, `None` without a drawable layout.
    pub fn query_marker(&self) -> ChartResult<Option<QueryMarker>> {
        let Some(layout) = self.layout() else {
            return Ok(None);
        };

        let time = self.query_time();
        let x = match self.highlight_offset() {
            Some(offset) => offset,
            None => layout.time_scale.time_to_pixel(time)?,
        };
        let price = self.price_at(time);
        let y = layout.price_scale.price_to_pixel(price.unwrap_or(0.0))?;

        Ok(Some(QueryMarker { time, x, y, price }))
    }

    /// Label for the lowest visible price, drawn below its point.
    pub fn min_price_label(&self) -> ChartResult<Option<ExtremeLabel>> {
        let Some(layout) = self.layout() else {
            return Ok(None);
        };
        extreme_label(
            self.derived.extremes.min,
            layout,
            &self.config,
            self.config.label_offset_px,
        )
        .map(Some)
    }

    /// Label for the highest visible price, drawn above its point.
    pub fn max_price_label(&self) -> ChartResult<Option<ExtremeLabel>> {
        let Some(layout) = self.layout() else {
            return Ok(None);
        };
        extreme_label(
            self.derived.extremes.max,
            layout,
            &self.config,
            -self.config.label_offset_px,
        )
        .map(Some)
    }
}
