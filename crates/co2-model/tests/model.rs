//! Tests for co2-model types.

use co2_model::{DashboardOptions, Sector, YoyCategory, percent_change};

#[test]
fn yoy_category_follows_sign() {
    assert_eq!(YoyCategory::from_change(Some(10.0)), YoyCategory::Positive);
    assert_eq!(YoyCategory::from_change(Some(-10.0)), YoyCategory::Negative);
    assert_eq!(YoyCategory::from_change(Some(0.0)), YoyCategory::Unavailable);
    assert_eq!(YoyCategory::from_change(None), YoyCategory::Unavailable);
    assert_eq!(YoyCategory::Negative.as_str(), "negative");
}

#[test]
fn percent_change_guards_zero_baseline() {
    assert_eq!(percent_change(110.0, 100.0), Some(10.0));
    assert_eq!(percent_change(90.0, 100.0), Some(-10.0));
    assert_eq!(percent_change(5.0, 0.0), None);
    assert_eq!(percent_change(0.0, 0.0), None);
}

#[test]
fn sectors_keep_stacking_order() {
    let columns: Vec<&str> = Sector::ALL.iter().map(|sector| sector.column()).collect();
    assert_eq!(columns, ["coal_co2", "oil_co2", "gas_co2", "cement_co2"]);
    for (idx, sector) in Sector::ALL.iter().enumerate() {
        assert_eq!(sector.index(), idx);
    }
}

#[test]
fn options_fill_missing_fields_from_defaults() {
    let options: DashboardOptions = toml::from_str("bar_top_n = 5\n").expect("parse options");
    assert_eq!(options.bar_top_n, 5);
    assert_eq!(options.treemap_top_n, 15);
    assert_eq!(options.thumb_radius_px, 7.0);
}

#[test]
fn category_serializes_lowercase() {
    let json = serde_json::to_string(&YoyCategory::Positive).expect("serialize category");
    assert_eq!(json, "\"positive\"");
}
