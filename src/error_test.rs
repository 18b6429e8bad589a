use super::*;

#[test]
fn require_passes_found_value_through() {
    let found = require(Some(7), "iconMoon").expect("value should pass through");
    assert_eq!(found, 7);
}

#[test]
fn require_reports_missing_id() {
    let err = require::<()>(None, "iconSun").unwrap_err();
    assert!(matches!(err, ToggleError::ElementNotFound { ref id } if id == "iconSun"));
}

#[test]
fn element_not_found_display_names_the_id() {
    let err = ToggleError::ElementNotFound { id: "darkModeToggle".into() };
    assert_eq!(err.to_string(), "element not found: #darkModeToggle");
}

#[test]
fn invalid_config_wraps_serde_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ToggleError::from(serde_err);
    assert!(err.to_string().starts_with("invalid toggle config:"));
}

#[test]
fn no_document_display() {
    assert_eq!(ToggleError::NoDocument.to_string(), "no document available");
}
