use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::CompositeDataPoint;
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RenderFrame, TextBaseline, TextHAlign,
    TextPrimitive,
};

use super::readout::round_for_display;
use super::{ChartEngineConfig, ChartLayout, DerivedChart};

/// Stroke and fill choices for the emitted primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub curve_color: Color,
    pub curve_width: f64,
    pub text_color: Color,
    pub label_font_size_px: f64,
    pub highlight_color: Color,
    pub highlight_width: f64,
    pub highlight_dash: (f64, f64),
    pub marker_radius: f64,
    pub marker_stroke_width: f64,
    pub marker_fill: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            curve_color: Color::rgb(245, 204, 69),
            curve_width: 2.0,
            text_color: Color::rgb(199, 194, 219),
            label_font_size_px: 16.0,
            highlight_color: Color::rgb(237, 237, 245),
            highlight_width: 1.0,
            highlight_dash: (10.0, 5.0),
            marker_radius: 5.0,
            marker_stroke_width: 2.0,
            marker_fill: Color::rgb(51, 33, 97),
        }
    }
}

/// Position of the highlight line and marker for one query time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueryMarker {
    pub time: DateTime<Utc>,
    pub x: f64,
    /// Marker height; an unmatched lookup is drawn at price `0`.
    pub y: f64,
    pub price: Option<f64>,
}

/// Min/max price label anchored to its data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremeLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Horizontal clamp keeping centered labels inside the bound area.
#[must_use]
pub fn clamp_label_x(x: f64, bounded_width: f64, margin_px: f64) -> f64 {
    x.min(bounded_width - margin_px).max(margin_px)
}

pub(crate) fn extreme_label(
    point: CompositeDataPoint,
    layout: &ChartLayout,
    config: &ChartEngineConfig,
    vertical_offset: f64,
) -> ChartResult<ExtremeLabel> {
    let x = layout.time_scale.time_to_pixel(point.date)?;
    let y = layout.price_scale.price_to_pixel(point.price)?;
    Ok(ExtremeLabel {
        text: format!(
            "{} {}",
            config.price_label_prefix,
            round_for_display(point.price)
        ),
        x: clamp_label_x(
            x,
            layout.dimensions.bounded_width,
            config.label_clamp_margin_px,
        ),
        y: y + vertical_offset,
    })
}

/// Materializes the step curve, min/max labels, highlight line and marker.
pub fn build_render_frame(
    derived: &DerivedChart,
    layout: &ChartLayout,
    marker: QueryMarker,
    config: &ChartEngineConfig,
    style: ChartStyle,
) -> ChartResult<RenderFrame> {
    let min_label = extreme_label(derived.extremes.min, layout, config, config.label_offset_px)?;
    let max_label = extreme_label(derived.extremes.max, layout, config, -config.label_offset_px)?;
    let bounded_height = layout.dimensions.bounded_height;

    let frame = RenderFrame::new(layout.dimensions)
        .with_text(TextPrimitive::new(
            min_label.text,
            min_label.x,
            min_label.y,
            style.label_font_size_px,
            style.text_color,
            TextHAlign::Center,
            TextBaseline::Hanging,
        ))
        .with_text(TextPrimitive::new(
            max_label.text,
            max_label.x,
            max_label.y,
            style.label_font_size_px,
            style.text_color,
            TextHAlign::Center,
            TextBaseline::Alphabetic,
        ))
        .with_path(PathPrimitive::new(
            layout.step_path.to_svg_path_data(),
            style.curve_width,
            style.curve_color,
        ))
        .with_line(
            LinePrimitive::new(
                marker.x,
                0.0,
                marker.x,
                bounded_height,
                style.highlight_width,
                style.highlight_color,
            )
            .dashed(style.highlight_dash.0, style.highlight_dash.1),
        )
        .with_circle(CirclePrimitive {
            cx: marker.x,
            cy: marker.y,
            radius: style.marker_radius,
            stroke_width: style.marker_stroke_width,
            stroke: style.highlight_color,
            fill: style.marker_fill,
        });

    Ok(frame)
}
