//! Background theme definitions.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Prefix shared by every body class a theme can apply.
pub const CLASS_PREFIX: &str = "theme-";

/// A selectable background variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Identifier persisted to storage and used to build the body class.
    pub name: String,
    /// Human-readable name shown in the button hint.
    pub label: String,
}

impl Theme {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self { name: name.into(), label: label.into() }
    }

    /// Body class for this theme, e.g. `theme-aurora`.
    pub fn css_class(&self) -> String {
        format!("{CLASS_PREFIX}{}", self.name)
    }
}

/// The stock background list. Index 0 renders as no class at all.
pub fn builtin() -> Vec<Theme> {
    [
        ("default", "默认"),
        ("starry", "星空"),
        ("aurora", "极光"),
        ("wave", "波浪"),
        ("glow", "光晕"),
        ("multicolor", "多色"),
        ("deep", "深邃"),
    ]
    .into_iter()
    .map(|(name, label)| Theme::new(name, label))
    .collect()
}

/// Linear scan for an exact name match.
pub fn position(themes: &[Theme], name: &str) -> Option<usize> {
    themes.iter().position(|t| t.name == name)
}

/// Body class edits needed to show one theme.
///
/// Every theme class is removed before the new one is added, so the body
/// never carries two theme classes at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassChange {
    pub remove: Vec<String>,
    pub add: Option<String>,
}

impl ClassChange {
    /// Plan the class edits for `name` against `themes`.
    ///
    /// The first theme is the default and adds nothing. Names outside the
    /// list also add nothing; the body is simply cleared.
    pub fn for_theme(themes: &[Theme], name: &str) -> Self {
        let remove = themes.iter().map(Theme::css_class).collect();
        let add = match position(themes, name) {
            Some(0) | None => None,
            Some(idx) => Some(themes[idx].css_class()),
        };
        Self { remove, add }
    }
}
