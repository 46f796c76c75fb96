use crate::core::ChartDimensions;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitive coordinates are relative to the bound area; backends translate
/// them by `origin` (the left/top margins) and clip to the bounded size.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub dimensions: ChartDimensions,
    pub origin: (f64, f64),
    pub paths: Vec<PathPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(dimensions: ChartDimensions) -> Self {
        Self {
            dimensions,
            origin: (dimensions.margins.left, dimensions.margins.top),
            paths: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.dimensions.validate()?;
        if !self.origin.0.is_finite() || !self.origin.1.is_finite() {
            return Err(ChartError::InvalidData(
                "frame origin must be finite".to_owned(),
            ));
        }

        for path in &self.paths {
            path.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}
