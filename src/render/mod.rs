mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, TextBaseline, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully materialized `RenderFrame`; nothing flows back
/// into the engine.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
