#[cfg(test)]
#[path = "cycle_test.rs"]
mod cycle_test;

use crate::theme::{self, ClassChange, Theme};

/// Wrap-around cursor over a non-empty theme list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeCycle {
    themes: Vec<Theme>,
    index: usize,
}

impl ThemeCycle {
    /// Start at the theme called `saved`, or at index 0 when `saved` is
    /// absent or names no theme in the list.
    ///
    /// Returns `None` only for an empty list.
    pub fn new(themes: Vec<Theme>, saved: Option<&str>) -> Option<Self> {
        if themes.is_empty() {
            return None;
        }
        let index = saved.and_then(|name| theme::position(&themes, name)).unwrap_or(0);
        Some(Self { themes, index })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn current(&self) -> &Theme {
        &self.themes[self.index]
    }

    /// Whether the current theme is the first (class-less) one.
    pub fn is_default(&self) -> bool {
        self.index == 0
    }

    /// Move to the next theme, wrapping after the last.
    pub fn advance(&mut self) -> &Theme {
        self.index = (self.index + 1) % self.themes.len();
        self.current()
    }

    /// Class edits that make `<body>` show the current theme.
    pub fn class_change(&self) -> ClassChange {
        ClassChange::for_theme(&self.themes, &self.current().name)
    }

    /// Button hint for the current theme.
    pub fn hint(&self) -> String {
        format!("当前: {} | 点击切换", self.current().label)
    }
}
