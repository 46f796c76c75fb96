use approx::assert_abs_diff_eq;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use tariff_chart::ChartError;
use tariff_chart::core::{LinearScale, PriceScale, PriceScaleTuning, TimeScale};

fn hour(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid ts")
        + TimeDelta::hours(offset)
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.apply(original).expect("to pixel");
    let recovered = scale.invert(px).expect("from pixel");

    assert_abs_diff_eq!(px, 325.0, epsilon = 1e-9);
    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn linear_scale_supports_descending_domain() {
    let scale = LinearScale::new((100.0, 0.0), (50.0, 250.0)).expect("valid scale");

    assert_abs_diff_eq!(scale.apply(100.0).expect("top"), 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.apply(0.0).expect("bottom"), 250.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.invert(150.0).expect("mid"), 50.0, epsilon = 1e-9);
}

#[test]
fn degenerate_linear_scales_are_rejected() {
    assert!(LinearScale::new((1.0, 1.0), (0.0, 100.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (0.0, 0.0)).is_err());
    assert!(LinearScale::new((0.0, f64::NAN), (0.0, 10.0)).is_err());

    let scale = LinearScale::new((0.0, 1.0), (0.0, 10.0)).expect("valid scale");
    assert!(scale.apply(f64::INFINITY).is_err());
    assert!(scale.invert(f64::NAN).is_err());
}

#[test]
fn time_domain_spans_window_plus_trailing_bucket() {
    let scale = TimeScale::for_window(hour(47), 48, 960.0).expect("time scale");

    let (begin, end) = scale.domain();
    assert_eq!(begin, hour(0));
    assert_eq!(end, hour(48));

    assert_abs_diff_eq!(scale.time_to_pixel(hour(0)).expect("begin"), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.time_to_pixel(hour(48)).expect("end"), 960.0, epsilon = 1e-9);
    // Each hour bucket is 20px wide.
    assert_abs_diff_eq!(scale.time_to_pixel(hour(47)).expect("last"), 940.0, epsilon = 1e-9);
}

#[test]
fn time_scale_inverts_pixels_to_timestamps() {
    let scale = TimeScale::for_window(hour(5), 6, 600.0).expect("time scale");

    let time = scale.pixel_to_time(250.0).expect("invert");
    assert_eq!(time, hour(2) + TimeDelta::minutes(30));
}

#[test]
fn time_scale_rejects_zero_width_and_zero_hours() {
    let zero_width = TimeScale::for_window(hour(5), 6, 0.0).expect_err("zero width");
    assert!(matches!(zero_width, ChartError::InvalidDimensions { .. }));

    let zero_hours = TimeScale::for_window(hour(5), 0, 600.0).expect_err("zero hours");
    assert!(matches!(zero_hours, ChartError::InvalidWindow { hours: 0 }));
}

#[test]
fn price_scale_maps_higher_prices_higher_on_screen() {
    let scale = PriceScale::fit(10.0, 110.0, 600.0, PriceScaleTuning::default())
        .expect("price scale");

    assert_eq!(scale.domain(), (110.0, 10.0));
    assert_eq!(scale.range(), (50.0, 550.0));
    assert_abs_diff_eq!(scale.price_to_pixel(110.0).expect("max"), 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.price_to_pixel(10.0).expect("min"), 550.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.pixel_to_price(300.0).expect("mid"), 60.0, epsilon = 1e-9);
}

#[test]
fn flat_price_window_gets_synthetic_span() {
    let tuning = PriceScaleTuning {
        padding_px: 50.0,
        min_span_absolute: 2.0,
    };
    let scale = PriceScale::fit(42.0, 42.0, 400.0, tuning).expect("price scale");

    assert_eq!(scale.domain(), (43.0, 41.0));
    let y = scale.price_to_pixel(42.0).expect("flat price");
    assert!(y.is_finite());
    assert_abs_diff_eq!(y, 200.0, epsilon = 1e-9);
}

#[test]
fn short_plot_shrinks_padding_instead_of_flipping_axis() {
    let scale = PriceScale::fit(0.0, 10.0, 80.0, PriceScaleTuning::default())
        .expect("price scale");

    assert_abs_diff_eq!(scale.padding_px(), 20.0, epsilon = 1e-9);
    let top = scale.price_to_pixel(10.0).expect("top");
    let bottom = scale.price_to_pixel(0.0).expect("bottom");
    assert!(top < bottom);
}

#[test]
fn price_scale_rejects_zero_height_and_bad_tuning() {
    let zero_height = PriceScale::fit(0.0, 10.0, 0.0, PriceScaleTuning::default())
        .expect_err("zero height");
    assert!(matches!(zero_height, ChartError::InvalidDimensions { .. }));

    let bad_tuning = PriceScaleTuning {
        padding_px: -1.0,
        min_span_absolute: 1.0,
    };
    assert!(PriceScale::fit(0.0, 10.0, 400.0, bad_tuning).is_err());
}
