use serde::Serialize;

use crate::core::{
    ChartDimensions, CompositeDataPoint, PriceExtremes, PriceScale, PriceScaleTuning,
    RawDataPoint, StepPath, TimeScale, ToggleSet, WindowSelection, build_step_path,
    compose_prices, select_window,
};
use crate::error::{ChartError, ChartResult};

/// Everything the derived chart state depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartInputs {
    /// Upstream feed, newest first.
    pub raw_series: Vec<RawDataPoint>,
    pub toggles: ToggleSet,
    pub num_hours_shown: usize,
    /// `None` until the first layout arrives.
    pub dimensions: Option<ChartDimensions>,
}

/// Pixel-space state, present only when the bound area is drawable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub dimensions: ChartDimensions,
    pub time_scale: TimeScale,
    pub price_scale: PriceScale,
    pub step_path: StepPath,
}

/// Values recomputed from [`ChartInputs`] on every input change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedChart {
    /// Composite prices in feed order.
    pub composite: Vec<CompositeDataPoint>,
    pub window: WindowSelection,
    pub extremes: PriceExtremes,
    pub layout: Option<ChartLayout>,
}

impl DerivedChart {
    #[must_use]
    pub fn chronological(&self) -> &[CompositeDataPoint] {
        self.window.chronological()
    }

    #[must_use]
    pub fn visible(&self) -> &[CompositeDataPoint] {
        self.window.visible()
    }
}

/// Pure recomputation pipeline: compose, select window, fit scales, build path.
///
/// A missing or zero-sized layout is not an error: the series state is still
/// derived and `layout` is `None`, meaning nothing renders this frame.
pub fn derive_chart(inputs: &ChartInputs, tuning: PriceScaleTuning) -> ChartResult<DerivedChart> {
    if inputs.raw_series.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let composite = compose_prices(&inputs.raw_series, inputs.toggles);
    let window = select_window(&composite, inputs.num_hours_shown)?;
    let extremes = window.extremes();

    let layout = match inputs.dimensions {
        Some(dimensions) if dimensions.has_drawable_area() => {
            Some(derive_layout(&window, extremes, dimensions, tuning)?)
        }
        _ => None,
    };

    Ok(DerivedChart {
        composite,
        window,
        extremes,
        layout,
    })
}

fn derive_layout(
    window: &WindowSelection,
    extremes: PriceExtremes,
    dimensions: ChartDimensions,
    tuning: PriceScaleTuning,
) -> ChartResult<ChartLayout> {
    let time_scale = TimeScale::for_window(
        window.max_date(),
        window.num_hours_shown(),
        dimensions.bounded_width,
    )?;
    let price_scale = PriceScale::fit(
        extremes.min.price,
        extremes.max.price,
        dimensions.bounded_height,
        tuning,
    )?;
    let step_path = build_step_path(window.visible(), time_scale, price_scale)?;

    Ok(ChartLayout {
        dimensions,
        time_scale,
        price_scale,
        step_path,
    })
}
