use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use tariff_chart::core::{CostComponent, RawDataPoint, ToggleSet, compose_prices};

fn raw(hour: u32, market: f64, tax: f64, net: f64, vat: f64) -> RawDataPoint {
    let date = Utc
        .with_ymd_and_hms(2024, 1, 1, hour, 0, 0)
        .single()
        .expect("valid ts");
    RawDataPoint::new(date, market, tax, net, vat)
}

#[test]
fn all_components_sum_then_scale_by_vat() {
    let series = vec![raw(1, 40.0, 70.0, 30.0, 1.25), raw(0, 10.0, 20.0, 30.0, 1.5)];

    let composite = compose_prices(&series, ToggleSet::all_enabled());

    assert_eq!(composite.len(), 2);
    assert!((composite[0].price - 175.0).abs() <= 1e-9);
    assert!((composite[1].price - 90.0).abs() <= 1e-9);
}

#[test]
fn composition_preserves_input_order_and_dates() {
    let series = vec![
        raw(5, 1.0, 0.0, 0.0, 1.0),
        raw(2, 2.0, 0.0, 0.0, 1.0),
        raw(9, 3.0, 0.0, 0.0, 1.0),
    ];

    let composite = compose_prices(&series, ToggleSet::all_enabled());

    let dates: Vec<_> = composite.iter().map(|point| point.date).collect();
    let expected: Vec<_> = series.iter().map(|point| point.date).collect();
    assert_eq!(dates, expected);
}

#[test]
fn disabled_vat_leaves_sum_unscaled() {
    let series = vec![raw(0, 10.0, 20.0, 30.0, 1.25)];
    let toggles = ToggleSet::all_enabled().with(CostComponent::Vat, false);

    let composite = compose_prices(&series, toggles);
    assert!((composite[0].price - 60.0).abs() <= 1e-9);
}

#[test]
fn disabled_additive_components_contribute_zero() {
    let series = vec![raw(0, 10.0, 20.0, 30.0, 2.0)];

    let market_only = ToggleSet::all_disabled().with(CostComponent::MarketPrice, true);
    assert!((compose_prices(&series, market_only)[0].price - 10.0).abs() <= 1e-9);

    let tax_and_vat = ToggleSet::all_disabled()
        .with(CostComponent::ElectricityTax, true)
        .with(CostComponent::Vat, true);
    assert!((compose_prices(&series, tax_and_vat)[0].price - 40.0).abs() <= 1e-9);

    let without_net = ToggleSet::all_enabled().with(CostComponent::NetTariff, false);
    assert!((compose_prices(&series, without_net)[0].price - 60.0).abs() <= 1e-9);
}

#[test]
fn only_vat_enabled_yields_zero() {
    let series = vec![raw(0, 10.0, 20.0, 30.0, 1.25), raw(1, -5.0, 1.0, 2.0, 1.25)];
    let toggles = ToggleSet::all_disabled().with(CostComponent::Vat, true);

    for point in compose_prices(&series, toggles) {
        assert_eq!(point.price, 0.0);
    }
}

#[test]
fn toggle_flips_and_reports_new_state() {
    let mut toggles = ToggleSet::default();
    assert!(toggles.is_enabled(CostComponent::ElectricityTax));

    assert!(!toggles.toggle(CostComponent::ElectricityTax));
    assert!(!toggles.with_elafgift);
    assert!(toggles.toggle(CostComponent::ElectricityTax));

    for component in CostComponent::ALL {
        assert!(toggles.is_enabled(component));
    }
}

#[test]
fn raw_point_from_decimal_components_is_supported() {
    let date = Utc
        .timestamp_opt(1_704_067_200, 0)
        .single()
        .expect("valid ts");
    let point = RawDataPoint::from_decimal(
        date,
        Decimal::new(12345, 2),
        Decimal::new(7610, 2),
        Decimal::new(2150, 2),
        Decimal::new(125, 2),
    )
    .expect("point");

    assert_eq!(point.date, date);
    assert!((point.market_price - 123.45).abs() <= 1e-9);
    assert!((point.electricity_tax - 76.10).abs() <= 1e-9);
    assert!((point.net_tarif - 21.50).abs() <= 1e-9);
    assert!((point.vat - 1.25).abs() <= 1e-9);
}

#[test]
fn raw_point_deserializes_from_camel_case_feed() {
    let json = r#"{
        "date": "2024-01-01T03:00:00Z",
        "marketPrice": 50.5,
        "electricityTax": 69.7,
        "netTarif": 21.0,
        "vat": 1.25
    }"#;

    let point: RawDataPoint = serde_json::from_str(json).expect("parse feed record");
    assert_eq!(
        point.date,
        Utc.with_ymd_and_hms(2024, 1, 1, 3, 0, 0)
            .single()
            .expect("valid ts")
    );
    assert!((point.market_price - 50.5).abs() <= 1e-9);
    assert!((point.vat - 1.25).abs() <= 1e-9);
}
