use super::*;

#[test]
fn default_matches_shipped_templates() {
    let config = PageConfig::default();
    assert_eq!(config.link_item, ".link-item");
    assert_eq!(config.main_link, ".main-link");
    assert_eq!(config.edit_links, ".edit-links");
    assert_eq!(config.popup_id, "myForm");
    assert_eq!(config.task_pairing, TaskPairing::Row);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_is_default() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PageConfig::from_json(r#"{"popupId": "loginForm", "taskPairing": "position"}"#).unwrap();
    assert_eq!(config.popup_id, "loginForm");
    assert_eq!(config.task_pairing, TaskPairing::Position);
    assert_eq!(config.main_link, ".main-link");
}

#[test]
fn malformed_json_is_config_error() {
    assert!(matches!(PageConfig::from_json("{not json"), Err(PageError::Config(_))));
}

#[test]
fn unknown_pairing_is_config_error() {
    assert!(matches!(PageConfig::from_json(r#"{"taskPairing": "id"}"#), Err(PageError::Config(_))));
}

#[test]
fn empty_selector_is_rejected() {
    let err = PageConfig::from_json(r#"{"mainLink": "  "}"#).unwrap_err();
    assert_eq!(err.to_string(), "invalid page config: mainLink must not be empty");
}

#[test]
fn empty_task_row_only_matters_for_row_pairing() {
    assert!(PageConfig::from_json(r#"{"taskRow": ""}"#).is_err());
    assert!(PageConfig::from_json(r#"{"taskRow": "", "taskPairing": "position"}"#).is_ok());
}
