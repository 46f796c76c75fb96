use approx::assert_abs_diff_eq;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use tariff_chart::api::clamp_label_x;
use tariff_chart::core::RawDataPoint;
use tariff_chart::render::{Color, NullRenderer, TextBaseline};
use tariff_chart::{ChartEngine, ChartEngineConfig};

fn hour(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid ts")
        + TimeDelta::hours(offset)
}

fn feed() -> Vec<RawDataPoint> {
    (0..24)
        .rev()
        .map(|h| RawDataPoint::new(hour(h), h as f64, 0.0, 0.0, 1.0))
        .collect()
}

fn engine_at(now: DateTime<Utc>) -> ChartEngine<NullRenderer, impl Fn() -> DateTime<Utc>> {
    let config = ChartEngineConfig::default().with_num_hours_shown(24);
    let mut engine = ChartEngine::with_clock(NullRenderer::default(), config, feed(), move || now)
        .expect("engine init");
    engine.resize_container(520.0, 345.0).expect("resize");
    engine
}

#[test]
fn render_emits_curve_labels_highlight_and_marker() {
    let mut engine = engine_at(hour(10));
    engine.render().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_circle_count, 1);
    assert_eq!(renderer.last_text_count, 2);
}

#[test]
fn frame_origin_follows_margins() {
    let frame = engine_at(hour(10))
        .build_frame()
        .expect("frame")
        .expect("laid out");

    assert_eq!(frame.origin, (30.0, 35.0));
    assert!(!frame.is_empty());
    frame.validate().expect("valid frame");
}

#[test]
fn extreme_labels_are_prefixed_rounded_and_clamped() {
    let engine = engine_at(hour(10));
    let frame = engine.build_frame().expect("frame").expect("laid out");

    let min = &frame.texts[0];
    assert_eq!(min.text, "ØRE 0");
    assert_eq!(min.baseline, TextBaseline::Hanging);
    // Hour 0 sits at x = 0 and is pulled in to the clamp margin.
    assert_abs_diff_eq!(min.x, 30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(min.y, 250.0 + 20.0, epsilon = 1e-9);

    let max = &frame.texts[1];
    assert_eq!(max.text, "ØRE 23");
    assert_eq!(max.baseline, TextBaseline::Alphabetic);
    assert_abs_diff_eq!(max.x, 450.0, epsilon = 1e-9);
    assert_abs_diff_eq!(max.y, 50.0 - 20.0, epsilon = 1e-9);

    let min_label = engine.min_price_label().expect("label").expect("laid out");
    assert_eq!(min_label.text, min.text);
}

#[test]
fn highlight_line_spans_bound_height_and_is_dashed() {
    let frame = engine_at(hour(10) + TimeDelta::minutes(15))
        .build_frame()
        .expect("frame")
        .expect("laid out");

    let line = frame.lines[0];
    assert_abs_diff_eq!(line.x1, 205.0, epsilon = 1e-9);
    assert_eq!(line.x1, line.x2);
    assert_eq!((line.y1, line.y2), (0.0, 300.0));
    assert_eq!(line.dash, Some((10.0, 5.0)));

    let marker = frame.circles[0];
    assert_eq!(marker.radius, 5.0);
    assert_eq!(marker.cx, line.x1);
}

#[test]
fn marker_drops_to_price_zero_when_unmatched() {
    let engine = engine_at(hour(40));
    let frame = engine.build_frame().expect("frame").expect("laid out");

    let expected_y = engine.map_price_to_pixel(0.0).expect("map");
    assert_abs_diff_eq!(frame.circles[0].cy, expected_y, epsilon = 1e-9);
}

#[test]
fn curve_path_matches_step_path() {
    let engine = engine_at(hour(10));
    let frame = engine.build_frame().expect("frame").expect("laid out");

    let step_path = engine.step_path().expect("path");
    assert_eq!(frame.paths[0].data, step_path.to_svg_path_data());
    assert!(frame.paths[0].data.starts_with("M 0 "));
}

#[test]
fn label_clamp_keeps_centered_text_inside() {
    assert_eq!(clamp_label_x(5.0, 480.0, 30.0), 30.0);
    assert_eq!(clamp_label_x(240.0, 480.0, 30.0), 240.0);
    assert_eq!(clamp_label_x(479.0, 480.0, 30.0), 450.0);
}

#[test]
fn colors_render_as_css_and_reject_bad_alpha() {
    let color = Color::rgb(245, 204, 69);
    assert_eq!(color.to_css(), "rgba(245, 204, 69, 1)");
    color.validate().expect("opaque color");

    assert_eq!(color.with_alpha(0.5).to_css(), "rgba(245, 204, 69, 0.5)");
    assert!(color.with_alpha(1.5).validate().is_err());
    assert!(color.with_alpha(f64::NAN).validate().is_err());
}
