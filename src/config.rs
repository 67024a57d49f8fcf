//! Toggle configuration.
//!
//! Defaults reproduce the stock documentation-site setup. A page can override
//! any field by embedding a JSON object in
//! `<script type="application/json" id="backdrop-config">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::theme::{self, Theme};

/// Element id of the optional inline JSON config.
pub const CONFIG_ELEMENT_ID: &str = "backdrop-config";

pub const DEFAULT_STORAGE_KEY: &str = "agnflow-background";
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// `localStorage` key holding the selected theme name.
    pub storage_key: String,
    /// Ordered themes. The first one is the default and applies no class.
    pub themes: Vec<Theme>,
    /// Delay before the button is revealed.
    pub reveal_delay_ms: u32,
    /// Button text.
    pub glyph: String,
    /// Class set on the injected button.
    pub button_class: String,
    /// Accessible name of the button. The hover title tracks the selection.
    pub title: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            themes: theme::builtin(),
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
            glyph: "🎨".to_owned(),
            button_class: "background-toggle".to_owned(),
            title: "切换背景主题".to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Parse and validate a JSON override. Missing fields keep defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the controller cannot cycle through.
    pub fn validate(&self) -> Result<()> {
        if self.themes.is_empty() {
            return Err(Error::NoThemes);
        }
        let mut seen = HashSet::new();
        for theme in &self.themes {
            if theme.name.is_empty() {
                return Err(Error::EmptyThemeName);
            }
            if !seen.insert(theme.name.as_str()) {
                return Err(Error::DuplicateTheme(theme.name.clone()));
            }
        }
        Ok(())
    }

    /// Load the page's inline config, falling back to defaults.
    ///
    /// A malformed override is logged and ignored.
    pub fn from_page() -> Self {
        let Some(raw) = crate::util::dom::inline_config(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}
