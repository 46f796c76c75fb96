use tracing::{debug, warn};

use crate::clock::WallClock;
use crate::core::{CompositeDataPoint, CostComponent, PriceExtremes, RawDataPoint, ToggleSet};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, ChartInputs, WindowPreset};

impl<R: Renderer, C: WallClock> ChartEngine<R, C> {
    /// Replaces the raw feed (newest first). Rejects an empty series.
    pub fn set_raw_series(&mut self, raw_series: Vec<RawDataPoint>) -> ChartResult<()> {
        if raw_series.is_empty() {
            warn!("rejecting empty raw series");
            return Err(ChartError::EmptySeries);
        }
        let count = raw_series.len();
        let candidate = ChartInputs {
            raw_series,
            toggles: self.inputs.toggles,
            num_hours_shown: self.inputs.num_hours_shown,
            dimensions: self.inputs.dimensions,
        };
        self.commit_inputs(candidate)?;
        debug!(count, "set raw series");
        Ok(())
    }

    #[must_use]
    pub fn raw_series(&self) -> &[RawDataPoint] {
        &self.inputs.raw_series
    }

    #[must_use]
    pub fn toggles(&self) -> ToggleSet {
        self.inputs.toggles
    }

    pub fn set_toggles(&mut self, toggles: ToggleSet) -> ChartResult<()> {
        if toggles == self.inputs.toggles {
            return Ok(());
        }
        self.update_inputs(|inputs| inputs.toggles = toggles)?;
        debug!(?toggles, "set cost component toggles");
        Ok(())
    }

    pub fn set_component_enabled(
        &mut self,
        component: CostComponent,
        enabled: bool,
    ) -> ChartResult<()> {
        self.set_toggles(self.inputs.toggles.with(component, enabled))
    }

    /// Flips one component and returns its new state.
    pub fn toggle_component(&mut self, component: CostComponent) -> ChartResult<bool> {
        let mut toggles = self.inputs.toggles;
        let enabled = toggles.toggle(component);
        self.set_toggles(toggles)?;
        Ok(enabled)
    }

    #[must_use]
    pub fn num_hours_shown(&self) -> usize {
        self.inputs.num_hours_shown
    }

    pub fn set_num_hours_shown(&mut self, num_hours_shown: usize) -> ChartResult<()> {
        if num_hours_shown == 0 {
            return Err(ChartError::InvalidWindow {
                hours: num_hours_shown,
            });
        }
        if num_hours_shown == self.inputs.num_hours_shown {
            return Ok(());
        }
        self.update_inputs(|inputs| inputs.num_hours_shown = num_hours_shown)?;
        debug!(
            num_hours_shown,
            visible = self.derived.visible().len(),
            truncated = self.derived.window.is_truncated(),
            "set visible window"
        );
        Ok(())
    }

    pub fn set_window_preset(&mut self, preset: WindowPreset) -> ChartResult<()> {
        self.set_num_hours_shown(preset.hours())
    }

    #[must_use]
    pub fn active_window_preset(&self) -> Option<WindowPreset> {
        WindowPreset::from_hours(self.inputs.num_hours_shown)
    }

    /// Composite prices in feed order.
    #[must_use]
    pub fn composite_series(&self) -> &[CompositeDataPoint] {
        &self.derived.composite
    }

    #[must_use]
    pub fn chronological_series(&self) -> &[CompositeDataPoint] {
        self.derived.chronological()
    }

    #[must_use]
    pub fn visible_series(&self) -> &[CompositeDataPoint] {
        self.derived.visible()
    }

    #[must_use]
    pub fn price_extremes(&self) -> PriceExtremes {
        self.derived.extremes
    }
}
