#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_stock_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.menu.toggle_selector, ".hamburger");
    assert_eq!(config.menu.nav_selector, "nav");
    assert_eq!(config.menu.link_selector, "nav a");
    assert_eq!(config.menu.active_class, "active");
    assert_eq!(config.menu.body_open_class, "menu-open");
    assert_eq!(config.menu.breakpoint_px, 768.0);
    assert_eq!(config.scroll.anchor_selector, "a[href^=\"#\"]");
    assert_eq!(config.reveal.selectors, vec![".service-card".to_string(), ".fade-in".to_string()]);
    assert_eq!(config.reveal.visible_class, "visible");
    assert_eq!(config.reveal.threshold, 0.1);
    assert_eq!(config.reveal.bottom_margin_px, 50.0);
}

#[test]
fn defaults_validate() {
    assert!(SiteConfig::default().validate().is_ok());
}

#[test]
fn empty_json_yields_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"menu":{"breakpoint_px":1024},"reveal":{"threshold":0.25}}"#).unwrap();
    assert_eq!(config.menu.breakpoint_px, 1024.0);
    assert_eq!(config.menu.toggle_selector, ".hamburger");
    assert_eq!(config.reveal.threshold, 0.25);
    assert_eq!(config.reveal.bottom_margin_px, 50.0);
    assert_eq!(config.scroll, ScrollConfig::default());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = SiteConfig::from_json("{\"menu\":").unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn threshold_above_one_is_rejected() {
    let err = SiteConfig::from_json(r#"{"reveal":{"threshold":1.5}}"#).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(msg) if msg.contains("reveal.threshold")));
}

#[test]
fn negative_breakpoint_is_rejected() {
    let err = SiteConfig::from_json(r#"{"menu":{"breakpoint_px":-1}}"#).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(msg) if msg.contains("menu.breakpoint_px")));
}

#[test]
fn blank_selector_is_rejected() {
    let err = SiteConfig::from_json(r#"{"scroll":{"anchor_selector":"  "}}"#).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(msg) if msg.contains("scroll.anchor_selector")));
}

#[test]
fn empty_reveal_selector_list_is_rejected() {
    let err = SiteConfig::from_json(r#"{"reveal":{"selectors":[]}}"#).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(_)));
}
