use super::*;

#[test]
fn element_not_found_names_the_selector() {
    let err = SiteError::ElementNotFound(".hamburger".into());
    assert_eq!(err.to_string(), "element not found: .hamburger");
}

#[test]
fn invalid_config_carries_reason() {
    let err = SiteError::InvalidConfig("threshold must be within 0..=1".into());
    assert!(err.to_string().contains("threshold"));
}

#[test]
fn serde_errors_convert() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SiteError = parse.into();
    assert!(matches!(err, SiteError::Config(_)));
    assert!(err.to_string().starts_with("config parse error"));
}
