use serde::{Deserialize, Serialize};

use crate::core::BoundingBox;

/// Host-assigned pointer identifier (e.g. the DOM `pointerId`).
pub type PointerId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScrubMode {
    #[default]
    Idle,
    Dragging,
}

/// Low-level pointer input, positioned in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { pointer_id: PointerId, client_x: f64 },
    Move { pointer_id: PointerId, client_x: f64 },
    Up { pointer_id: PointerId },
    /// The host lost pointer capture without an up event.
    CaptureLost { pointer_id: PointerId },
}

impl PointerEvent {
    #[must_use]
    pub fn pointer_id(self) -> PointerId {
        match self {
            Self::Down { pointer_id, .. }
            | Self::Move { pointer_id, .. }
            | Self::Up { pointer_id }
            | Self::CaptureLost { pointer_id } => pointer_id,
        }
    }
}

/// Result of feeding one event to the controller.
///
/// `Started` asks the host to capture `pointer_id`; `Ended` asks it to release.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScrubTransition {
    Ignored,
    Started { pointer_id: PointerId, offset: f64 },
    Moved { offset: f64 },
    Ended { pointer_id: PointerId },
}

/// Highlighted x offset inside the bound area; `None` defers to the live clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct HighlightState {
    pub offset: Option<f64>,
}

impl HighlightState {
    #[must_use]
    pub fn is_active(self) -> bool {
        self.offset.is_some()
    }
}

/// Turns pointer events into a clamped highlight offset.
///
/// One clamp margin applies to both press and move so the marker and its
/// label never overflow the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerScrubController {
    mode: ScrubMode,
    active_pointer: Option<PointerId>,
    highlight: HighlightState,
    clamp_margin_px: f64,
}

impl PointerScrubController {
    #[must_use]
    pub fn new(clamp_margin_px: f64) -> Self {
        Self {
            mode: ScrubMode::Idle,
            active_pointer: None,
            highlight: HighlightState::default(),
            clamp_margin_px: clamp_margin_px.max(0.0),
        }
    }

    #[must_use]
    pub fn mode(self) -> ScrubMode {
        self.mode
    }

    #[must_use]
    pub fn highlight(self) -> HighlightState {
        self.highlight
    }

    #[must_use]
    pub fn active_pointer(self) -> Option<PointerId> {
        self.active_pointer
    }

    #[must_use]
    pub fn clamp_margin_px(self) -> f64 {
        self.clamp_margin_px
    }

    /// Clamps a client x into `[margin, width - margin]` of `bound_box`.
    ///
    /// Boxes narrower than twice the margin pin the offset to `margin`.
    #[must_use]
    pub fn clamp_offset(self, client_x: f64, bound_box: BoundingBox) -> f64 {
        let local = client_x - bound_box.left;
        local
            .min(bound_box.width() - self.clamp_margin_px)
            .max(self.clamp_margin_px)
    }

    /// Pulls an active highlight back inside a bound area of `bounded_width`.
    ///
    /// Returns the new offset when one is active.
    pub fn refit(&mut self, bounded_width: f64) -> Option<f64> {
        let offset = self.highlight.offset?;
        let clamped = offset
            .min(bounded_width - self.clamp_margin_px)
            .max(self.clamp_margin_px);
        self.highlight.offset = Some(clamped);
        Some(clamped)
    }

    /// Dispatches one event against the current state.
    ///
    /// `bound_box` must be the geometry captured at the most recent layout.
    pub fn handle(&mut self, event: PointerEvent, bound_box: BoundingBox) -> ScrubTransition {
        match (self.mode, event) {
            (ScrubMode::Idle, PointerEvent::Down { pointer_id, client_x }) => {
                if !client_x.is_finite() || !bound_box.contains_x(client_x) {
                    return ScrubTransition::Ignored;
                }
                let offset = self.clamp_offset(client_x, bound_box);
                self.mode = ScrubMode::Dragging;
                self.active_pointer = Some(pointer_id);
                self.highlight.offset = Some(offset);
                ScrubTransition::Started { pointer_id, offset }
            }
            (ScrubMode::Dragging, PointerEvent::Move { pointer_id, client_x })
                if self.active_pointer == Some(pointer_id) && client_x.is_finite() =>
            {
                let offset = self.clamp_offset(client_x, bound_box);
                self.highlight.offset = Some(offset);
                ScrubTransition::Moved { offset }
            }
            (
                ScrubMode::Dragging,
                PointerEvent::Up { pointer_id } | PointerEvent::CaptureLost { pointer_id },
            ) if self.active_pointer == Some(pointer_id) => {
                self.reset();
                ScrubTransition::Ended { pointer_id }
            }
            _ => ScrubTransition::Ignored,
        }
    }

    /// Drops any drag session and clears the highlight.
    pub fn reset(&mut self) {
        self.mode = ScrubMode::Idle;
        self.active_pointer = None;
        self.highlight = HighlightState::default();
    }
}

impl Default for PointerScrubController {
    fn default() -> Self {
        Self::new(30.0)
    }
}
