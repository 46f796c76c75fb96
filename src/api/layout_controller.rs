use chrono::{DateTime, Utc};
use tracing::debug;

use crate::clock::WallClock;
use crate::core::{BoundingBox, ChartDimensions, PriceScale, StepPath, TimeScale};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, ChartLayout};

impl<R: Renderer, C: WallClock> ChartEngine<R, C> {
    /// Applies a layout reported by the dimension observer.
    ///
    /// Zero-sized bound areas are accepted; the engine then carries no layout
    /// and renders nothing until a drawable size arrives. A new layout drops
    /// any bound box set for the previous one and refits an active highlight.
    pub fn set_dimensions(&mut self, dimensions: ChartDimensions) -> ChartResult<()> {
        let dimensions = dimensions.validate()?;
        if self.inputs.dimensions == Some(dimensions) {
            return Ok(());
        }
        self.update_inputs(|inputs| inputs.dimensions = Some(dimensions))?;
        self.bound_box_override = None;
        if let Some(offset) = self.scrub.refit(dimensions.bounded_width) {
            debug!(offset, "highlight refit to new layout");
        }
        debug!(
            width = dimensions.width,
            height = dimensions.height,
            bounded_width = dimensions.bounded_width,
            bounded_height = dimensions.bounded_height,
            drawable = dimensions.has_drawable_area(),
            "set chart dimensions"
        );
        Ok(())
    }

    /// Derives dimensions from a container size using the configured margins.
    pub fn resize_container(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let dimensions = ChartDimensions::from_container(width, height, self.config.margins)?;
        self.set_dimensions(dimensions)
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<ChartDimensions> {
        self.inputs.dimensions
    }

    /// Records the bound area's client-space box as measured by the host.
    ///
    /// The box holds until the next layout change. Without one the engine
    /// assumes the container sits at the client origin and derives the box
    /// from the margins. Call this after `set_dimensions`.
    pub fn set_bound_box(&mut self, bound_box: BoundingBox) -> ChartResult<()> {
        if !bound_box.left.is_finite()
            || !bound_box.right.is_finite()
            || bound_box.right < bound_box.left
        {
            return Err(ChartError::InvalidData(
                "bound box must be finite with right >= left".to_owned(),
            ));
        }
        self.bound_box_override = Some(bound_box);
        Ok(())
    }

    #[must_use]
    pub fn bound_box(&self) -> Option<BoundingBox> {
        self.bound_box_override.or_else(|| {
            self.inputs
                .dimensions
                .map(ChartDimensions::default_bound_box)
        })
    }

    #[must_use]
    pub fn layout(&self) -> Option<&ChartLayout> {
        self.derived.layout.as_ref()
    }

    #[must_use]
    pub fn time_scale(&self) -> Option<TimeScale> {
        self.layout().map(|layout| layout.time_scale)
    }

    #[must_use]
    pub fn price_scale(&self) -> Option<PriceScale> {
        self.layout().map(|layout| layout.price_scale)
    }

    #[must_use]
    pub fn step_path(&self) -> Option<&StepPath> {
        self.layout().map(|layout| &layout.step_path)
    }

    pub fn map_time_to_pixel(&self, time: DateTime<Utc>) -> ChartResult<f64> {
        self.require_layout()?.time_scale.time_to_pixel(time)
    }

    pub fn map_pixel_to_time(&self, pixel: f64) -> ChartResult<DateTime<Utc>> {
        self.require_layout()?.time_scale.pixel_to_time(pixel)
    }

    pub fn map_price_to_pixel(&self, price: f64) -> ChartResult<f64> {
        self.require_layout()?.price_scale.price_to_pixel(price)
    }

    pub fn map_pixel_to_price(&self, pixel: f64) -> ChartResult<f64> {
        self.require_layout()?.price_scale.pixel_to_price(pixel)
    }

    fn require_layout(&self) -> ChartResult<&ChartLayout> {
        self.layout().ok_or_else(|| {
            let (width, height) = self
                .inputs
                .dimensions
                .map_or((0.0, 0.0), |d| (d.bounded_width, d.bounded_height));
            ChartError::InvalidDimensions { width, height }
        })
    }
}
