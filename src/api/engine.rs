use tracing::{debug, trace};

use crate::clock::{ClockTicker, LiveClock, SystemClock, WallClock};
use crate::core::{BoundingBox, RawDataPoint};
use crate::error::ChartResult;
use crate::interaction::PointerScrubController;
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::{ChartStyle, build_render_frame};
use super::{ChartEngineConfig, ChartInputs, DerivedChart, derive_chart};

/// Composition root consumed by host applications.
///
/// Holds the inputs (raw series, toggles, window size, layout), the state
/// derived from them, the scrub controller and the live clock. Every input
/// change reruns [`derive_chart`] synchronously; a failed recomputation leaves
/// the previous inputs and derived state in place.
///
/// Dropping the engine releases the live clock timer.
pub struct ChartEngine<R: Renderer, C: WallClock = SystemClock> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
    pub(super) style: ChartStyle,
    pub(super) inputs: ChartInputs,
    pub(super) derived: DerivedChart,
    pub(super) bound_box_override: Option<BoundingBox>,
    pub(super) scrub: PointerScrubController,
    pub(super) clock: LiveClock<C>,
    pub(super) ticker: Option<ClockTicker>,
}

impl<R: Renderer> ChartEngine<R, SystemClock> {
    /// Creates an engine reading the system clock.
    ///
    /// `raw_series` must not be empty.
    pub fn new(
        renderer: R,
        config: ChartEngineConfig,
        raw_series: Vec<RawDataPoint>,
    ) -> ChartResult<Self> {
        Self::with_clock(renderer, config, raw_series, SystemClock)
    }
}

impl<R: Renderer, C: WallClock> ChartEngine<R, C> {
    pub fn with_clock(
        renderer: R,
        config: ChartEngineConfig,
        raw_series: Vec<RawDataPoint>,
        clock: C,
    ) -> ChartResult<Self> {
        config.validate()?;

        let inputs = ChartInputs {
            raw_series,
            toggles: config.toggles,
            num_hours_shown: config.num_hours_shown,
            dimensions: None,
        };
        let derived = derive_chart(&inputs, config.price_scale_tuning())?;
        debug!(
            points = inputs.raw_series.len(),
            num_hours_shown = inputs.num_hours_shown,
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            scrub: PointerScrubController::new(config.scrub_clamp_margin_px),
            clock: LiveClock::new(clock, config.clock_interval()),
            style: ChartStyle::default(),
            config,
            inputs,
            derived,
            bound_box_override: None,
            ticker: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ChartStyle) {
        self.style = style;
    }

    #[must_use]
    pub fn inputs(&self) -> &ChartInputs {
        &self.inputs
    }

    #[must_use]
    pub fn derived(&self) -> &DerivedChart {
        &self.derived
    }

    /// Applies `edit` to a copy of the current inputs and commits it.
    pub(super) fn update_inputs(
        &mut self,
        edit: impl FnOnce(&mut ChartInputs),
    ) -> ChartResult<()> {
        let mut candidate = self.inputs.clone();
        edit(&mut candidate);
        self.commit_inputs(candidate)
    }

    /// Recomputes derived state from `candidate` and commits both on success.
    pub(super) fn commit_inputs(&mut self, candidate: ChartInputs) -> ChartResult<()> {
        let derived = derive_chart(&candidate, self.config.price_scale_tuning())?;
        trace!(
            visible = derived.visible().len(),
            has_layout = derived.layout.is_some(),
            "chart recomputed"
        );
        self.inputs = candidate;
        self.derived = derived;
        Ok(())
    }

    /// Builds the frame for the current state, or `None` when nothing is drawable.
    pub fn build_frame(&self) -> ChartResult<Option<RenderFrame>> {
        let Some(layout) = self.derived.layout.as_ref() else {
            return Ok(None);
        };
        let Some(marker) = self.query_marker()? else {
            return Ok(None);
        };
        build_render_frame(&self.derived, layout, marker, &self.config, self.style).map(Some)
    }

    /// Renders one frame. Skips the draw when the bound area has no extent.
    pub fn render(&mut self) -> ChartResult<()> {
        match self.build_frame()? {
            Some(frame) => self.renderer.render(&frame),
            None => {
                debug!("skipping render without a drawable layout");
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consumes the engine, stopping the live clock timer.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
