use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use proptest::prelude::*;

use tariff_chart::core::{
    CompositeDataPoint, LinearScale, PriceScale, PriceScaleTuning, RawDataPoint, TimeScale,
    ToggleSet, build_step_path, compose_prices, select_window,
};

fn hour(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid ts")
        + TimeDelta::hours(offset)
}

fn raw_strategy() -> impl Strategy<Value = Vec<RawDataPoint>> {
    prop::collection::vec(
        (-500.0f64..500.0, 0.0f64..100.0, 0.0f64..100.0, 1.0f64..1.5),
        1..96,
    )
    .prop_map(|components| {
        let len = components.len() as i64;
        components
            .into_iter()
            .enumerate()
            .map(|(i, (market, tax, tariff, vat))| {
                RawDataPoint::new(hour(len - 1 - i as i64), market, tax, tariff, vat)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn all_components_disabled_yields_zero(raw in raw_strategy()) {
        let composite = compose_prices(&raw, ToggleSet::all_disabled());
        prop_assert_eq!(composite.len(), raw.len());
        prop_assert!(composite.iter().all(|point| point.price == 0.0));
    }

    #[test]
    fn vat_alone_yields_zero(raw in raw_strategy()) {
        let toggles = ToggleSet {
            with_market_price: false,
            with_elafgift: false,
            with_net_tarif: false,
            with_vat: true,
        };
        prop_assert!(compose_prices(&raw, toggles).iter().all(|point| point.price == 0.0));
    }

    #[test]
    fn window_selection_is_idempotent_and_bounded(
        raw in raw_strategy(),
        hours in 1usize..200,
    ) {
        let composite = compose_prices(&raw, ToggleSet::all_enabled());
        let first = select_window(&composite, hours).expect("select");
        let second = select_window(&composite, hours).expect("select");

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.visible().len(), hours.min(composite.len()));
        prop_assert!(first
            .chronological()
            .windows(2)
            .all(|pair| pair[0].date <= pair[1].date));
    }

    #[test]
    fn linear_scale_is_monotonic_and_invertible(
        d0 in -1_000.0f64..1_000.0,
        span in 0.5f64..1_000.0,
        width in 1.0f64..4_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let scale = LinearScale::new((d0, d0 + span), (0.0, width)).expect("scale");
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_value = d0 + lo * span;
        let hi_value = d0 + hi * span;

        let lo_px = scale.apply(lo_value).expect("apply");
        let hi_px = scale.apply(hi_value).expect("apply");
        prop_assert!(lo_px <= hi_px + 1e-9);

        let recovered = scale.invert(lo_px).expect("invert");
        prop_assert!((recovered - lo_value).abs() <= 1e-6 * span.max(1.0));
    }

    #[test]
    fn price_scale_puts_higher_prices_higher(
        min in -200.0f64..200.0,
        spread in 0.0f64..300.0,
        height in 20.0f64..1_200.0,
    ) {
        let max = min + spread;
        let scale = PriceScale::fit(min, max, height, PriceScaleTuning::default())
            .expect("price scale");

        let top = scale.price_to_pixel(max).expect("max");
        let bottom = scale.price_to_pixel(min).expect("min");
        prop_assert!(top.is_finite() && bottom.is_finite());
        prop_assert!(top <= bottom);
    }

    #[test]
    fn full_window_path_covers_time_domain(
        prices in prop::collection::vec(-100.0f64..400.0, 1..72),
        width in 10.0f64..2_000.0,
    ) {
        let points: Vec<_> = prices
            .iter()
            .enumerate()
            .map(|(h, price)| CompositeDataPoint::new(hour(h as i64), *price))
            .collect();
        let selection = select_window(&points, points.len()).expect("select");
        let extremes = selection.extremes();
        let time_scale = TimeScale::for_window(selection.max_date(), points.len(), width)
            .expect("time scale");
        let price_scale = PriceScale::fit(
            extremes.min.price,
            extremes.max.price,
            300.0,
            PriceScaleTuning::default(),
        )
        .expect("price scale");

        let path = build_step_path(selection.visible(), time_scale, price_scale).expect("path");
        let (left, right) = path.horizontal_extent().expect("extent");
        prop_assert!(left.abs() <= 1e-6);
        prop_assert!((right - width).abs() <= 1e-6);
        prop_assert_eq!(path.commands().len(), 2 + 2 * points.len());
    }
}
