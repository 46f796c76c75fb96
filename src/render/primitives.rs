use crate::error::{ChartError, ChartResult};

/// sRGB color with 8-bit channels and a straight alpha in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// CSS `rgba(...)` notation, usable as an SVG paint value.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::InvalidData(
                "color alpha must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

fn validate_stroke_width(stroke_width: f64) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "stroke width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

/// Stroked, unfilled path given as SVG path data in bound-area pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub data: String,
    pub stroke_width: f64,
    pub color: Color,
}

impl PathPrimitive {
    #[must_use]
    pub fn new(data: impl Into<String>, stroke_width: f64, color: Color) -> Self {
        Self {
            data: data.into(),
            stroke_width,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.data.is_empty() {
            return Err(ChartError::InvalidData(
                "path data must not be empty".to_owned(),
            ));
        }
        if self.data.contains("NaN") || self.data.contains("inf") {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Draw command for one line segment, optionally dashed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
    /// `(dash, gap)` lengths in pixels; `None` draws a solid line.
    pub dash: Option<(f64, f64)>,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
            dash: None,
        }
    }

    #[must_use]
    pub const fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some((dash, gap));
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if let Some((dash, gap)) = self.dash {
            if !dash.is_finite() || !gap.is_finite() || dash <= 0.0 || gap < 0.0 {
                return Err(ChartError::InvalidData(
                    "line dash pattern must be finite with dash > 0".to_owned(),
                ));
            }
        }
        validate_stroke_width(self.stroke_width)?;
        self.color.validate()
    }
}

/// Marker circle with a stroked outline and solid fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub stroke: Color,
    pub fill: Color,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width)?;
        self.stroke.validate()?;
        self.fill.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical anchoring of text relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    /// `y` is the alphabetic baseline; text extends upward.
    Alphabetic,
    /// `y` is the top edge; text hangs downward.
    Hanging,
}

/// Draw command for one label in bound-area pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub baseline: TextBaseline,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
        baseline: TextBaseline,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            baseline,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
