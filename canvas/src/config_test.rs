#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_constants() {
    let config = CanvasConfig::default();
    assert_eq!(config.min_scale_pct, 20.0);
    assert_eq!(config.max_scale_pct, 200.0);
    assert_eq!(config.scale_step_pct, 10.0);
    assert_eq!(config.min_frame_size, 10.0);
    assert_eq!(config.fallback_viewport, (800.0, 600.0));
    assert_eq!(config.history_limit, 100);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_lookup_yields_defaults() {
    let config = CanvasConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, CanvasConfig::default());
}

#[test]
fn lookup_overrides_fields() {
    let config = CanvasConfig::from_lookup(lookup_from(&[
        ("CANVAS_SCALE_STEP_PCT", "25"),
        ("CANVAS_MIN_SCALE_PCT", " 25 "),
        ("CANVAS_HISTORY_LIMIT", "5"),
    ]))
    .unwrap();
    assert_eq!(config.scale_step_pct, 25.0);
    assert_eq!(config.min_scale_pct, 25.0);
    assert_eq!(config.history_limit, 5);
}

#[test]
fn unparseable_value_is_rejected() {
    let err = CanvasConfig::from_lookup(lookup_from(&[("CANVAS_MAX_SCALE_PCT", "huge")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "CANVAS_MAX_SCALE_PCT", value: "huge".into() });
}

#[test]
fn non_finite_value_is_rejected() {
    let err = CanvasConfig::from_lookup(lookup_from(&[("CANVAS_MIN_FRAME_SIZE", "NaN")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "CANVAS_MIN_FRAME_SIZE", .. }));
}

#[test]
fn inverted_scale_bounds_are_inconsistent() {
    let err = CanvasConfig::from_lookup(lookup_from(&[("CANVAS_MIN_SCALE_PCT", "300")])).unwrap_err();
    assert!(matches!(err, ConfigError::Inconsistent(_)));
}

#[test]
fn zero_history_limit_is_inconsistent() {
    let config = CanvasConfig { history_limit: 0, ..CanvasConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::Inconsistent(_))));
}
