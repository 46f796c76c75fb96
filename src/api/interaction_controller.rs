use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::clock::WallClock;
use crate::core::BoundingBox;
use crate::interaction::{HighlightState, PointerEvent, ScrubMode, ScrubTransition};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer, C: WallClock> ChartEngine<R, C> {
    #[must_use]
    pub fn scrub_mode(&self) -> ScrubMode {
        self.scrub.mode()
    }

    #[must_use]
    pub fn highlight_state(&self) -> HighlightState {
        self.scrub.highlight()
    }

    #[must_use]
    pub fn highlight_offset(&self) -> Option<f64> {
        self.scrub.highlight().offset
    }

    /// Timestamp under the highlight, when a drag is active and laid out.
    #[must_use]
    pub fn highlight_time(&self) -> Option<DateTime<Utc>> {
        let offset = self.highlight_offset()?;
        self.time_scale()?.pixel_to_time(offset).ok()
    }

    /// Feeds one pointer event through the scrub state machine.
    ///
    /// Events are ignored while no drawable layout exists. The host must
    /// capture the pointer on `Started` and release it on `Ended`.
    pub fn pointer_event(&mut self, event: PointerEvent) -> ScrubTransition {
        let bound_box = match (self.layout(), self.bound_box()) {
            // The host-measured box never extends past the laid-out plot width.
            (Some(layout), Some(bound_box)) => BoundingBox::new(
                bound_box.left,
                bound_box.left + bound_box.width().min(layout.dimensions.bounded_width),
            ),
            _ => {
                // Without geometry an active drag cannot be continued.
                if matches!(
                    event,
                    PointerEvent::Up { .. } | PointerEvent::CaptureLost { .. }
                ) && self.scrub.active_pointer() == Some(event.pointer_id())
                {
                    self.scrub.reset();
                    return ScrubTransition::Ended {
                        pointer_id: event.pointer_id(),
                    };
                }
                trace!(?event, "pointer event without layout ignored");
                return ScrubTransition::Ignored;
            }
        };

        let transition = self.scrub.handle(event, bound_box);
        match transition {
            ScrubTransition::Started { pointer_id, offset } => {
                debug!(pointer_id, offset, "scrub started");
            }
            ScrubTransition::Moved { offset } => trace!(offset, "scrub moved"),
            ScrubTransition::Ended { pointer_id } => debug!(pointer_id, "scrub ended"),
            ScrubTransition::Ignored => trace!(?event, "pointer event ignored"),
        }
        transition
    }

    /// Drops an active drag without a pointer-up, reverting to the live clock.
    pub fn cancel_scrub(&mut self) {
        if self.scrub.mode() == ScrubMode::Dragging {
            debug!("scrub cancelled");
        }
        self.scrub.reset();
    }
}
