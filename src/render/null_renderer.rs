use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer for tests and hosts that pull geometry directly.
///
/// Frames are still validated, so non-finite geometry fails here instead of
/// in a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_path_count: usize,
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_text_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_path_count = frame.paths.len();
        self.last_line_count = frame.lines.len();
        self.last_circle_count = frame.circles.len();
        self.last_text_count = frame.texts.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
