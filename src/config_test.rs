use super::*;

#[test]
fn default_config_uses_stock_values() {
    let config = ToggleConfig::default();
    assert_eq!(config.storage_key, "agnflow-background");
    assert_eq!(config.reveal_delay_ms, 1000);
    assert_eq!(config.glyph, "🎨");
    assert_eq!(config.button_class, "background-toggle");
    assert_eq!(config.title, "切换背景主题");
    assert_eq!(config.themes.len(), 7);
    assert!(config.validate().is_ok());
}

#[test]
fn from_json_keeps_defaults_for_missing_fields() {
    let config = ToggleConfig::from_json(r#"{"storage_key":"docs-bg"}"#).unwrap();
    assert_eq!(config.storage_key, "docs-bg");
    assert_eq!(config.themes, crate::theme::builtin());
    assert_eq!(config.reveal_delay_ms, 1000);
}

#[test]
fn from_json_accepts_custom_theme_list() {
    let raw = r#"{"themes":[{"name":"plain","label":"Plain"},{"name":"dusk","label":"Dusk"}],"reveal_delay_ms":0}"#;
    let config = ToggleConfig::from_json(raw).unwrap();
    assert_eq!(config.themes.len(), 2);
    assert_eq!(config.themes[1].name, "dusk");
    assert_eq!(config.reveal_delay_ms, 0);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(ToggleConfig::from_json("{not json"), Err(Error::ConfigJson(_))));
}

#[test]
fn validate_rejects_empty_theme_list() {
    let config = ToggleConfig { themes: Vec::new(), ..ToggleConfig::default() };
    assert!(matches!(config.validate(), Err(Error::NoThemes)));
}

#[test]
fn validate_rejects_empty_name() {
    let config = ToggleConfig { themes: vec![Theme::new("", "Blank")], ..ToggleConfig::default() };
    assert!(matches!(config.validate(), Err(Error::EmptyThemeName)));
}

#[test]
fn validate_rejects_duplicate_names() {
    let raw = r#"{"themes":[{"name":"a","label":"A"},{"name":"a","label":"Again"}]}"#;
    match ToggleConfig::from_json(raw) {
        Err(Error::DuplicateTheme(name)) => assert_eq!(name, "a"),
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn from_page_outside_browser_is_default() {
    assert_eq!(ToggleConfig::from_page(), ToggleConfig::default());
}
