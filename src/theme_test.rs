use super::*;

// =============================================================
// builtin list
// =============================================================

#[test]
fn builtin_has_seven_themes_with_default_first() {
    let themes = builtin();
    assert_eq!(themes.len(), 7);
    assert_eq!(themes[0].name, "default");
    assert_eq!(themes[1].name, "starry");
    assert_eq!(themes[2].name, "aurora");
    assert_eq!(themes[6].name, "deep");
}

#[test]
fn builtin_labels_match_site_language() {
    let binding = builtin();
    let labels: Vec<&str> = binding.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["默认", "星空", "极光", "波浪", "光晕", "多色", "深邃"]);
}

#[test]
fn builtin_names_are_unique() {
    let themes = builtin();
    for (i, a) in themes.iter().enumerate() {
        for b in &themes[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn css_class_prefixes_name() {
    assert_eq!(Theme::new("aurora", "Aurora").css_class(), "theme-aurora");
}

// =============================================================
// position
// =============================================================

#[test]
fn position_matches_exact_name_only() {
    let themes = builtin();
    assert_eq!(position(&themes, "wave"), Some(3));
    assert_eq!(position(&themes, "Wave"), None);
    assert_eq!(position(&themes, " wave"), None);
    assert_eq!(position(&themes, ""), None);
}

// =============================================================
// ClassChange
// =============================================================

#[test]
fn class_change_removes_every_theme_class() {
    let themes = builtin();
    let change = ClassChange::for_theme(&themes, "glow");
    let expected: Vec<String> = themes.iter().map(Theme::css_class).collect();
    assert_eq!(change.remove, expected);
    assert_eq!(change.add.as_deref(), Some("theme-glow"));
}

#[test]
fn class_change_for_default_adds_nothing() {
    let themes = builtin();
    let change = ClassChange::for_theme(&themes, "default");
    assert_eq!(change.remove.len(), themes.len());
    assert_eq!(change.add, None);
}

#[test]
fn class_change_for_unknown_name_only_clears() {
    let themes = builtin();
    let change = ClassChange::for_theme(&themes, "sepia");
    assert_eq!(change.remove.len(), themes.len());
    assert_eq!(change.add, None);
}

#[test]
fn class_change_leaves_at_most_one_theme_class() {
    let themes = builtin();
    for theme in &themes {
        let mut body: Vec<String> = themes.iter().map(Theme::css_class).collect();
        body.push("md-typeset".to_owned());
        let change = ClassChange::for_theme(&themes, &theme.name);
        body.retain(|c| !change.remove.contains(c));
        body.extend(change.add.clone());
        let theme_classes = body.iter().filter(|c| c.starts_with(CLASS_PREFIX)).count();
        assert!(theme_classes <= 1);
        assert!(body.iter().any(|c| c == "md-typeset"));
    }
}
