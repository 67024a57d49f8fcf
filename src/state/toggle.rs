//! The background toggle controller.
//!
//! One instance is built per page. It owns the selection and the store, and
//! every selection change goes through [`ThemeToggle::activate`], which also
//! persists the new theme name.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::config::ToggleConfig;
use crate::error::{Error, Result};
use crate::state::cycle::ThemeCycle;
use crate::theme::{ClassChange, Theme};
use crate::util::storage::ThemeStore;

#[derive(Debug)]
pub struct ThemeToggle<S> {
    cycle: ThemeCycle,
    storage_key: String,
    store: S,
}

impl<S: ThemeStore> ThemeToggle<S> {
    /// Restore the saved selection from `store`, or start at the default.
    ///
    /// A saved name that matches no theme is ignored. Errors only when the
    /// config lists no themes.
    pub fn initialize(config: &ToggleConfig, store: S) -> Result<Self> {
        let saved = store.load(&config.storage_key);
        let cycle = ThemeCycle::new(config.themes.clone(), saved.as_deref()).ok_or(Error::NoThemes)?;
        match saved {
            Some(name) if cycle.current().name == name => log::debug!("restored background theme {name}"),
            Some(name) => log::debug!("ignoring unknown saved background theme {name:?}"),
            None => {}
        }
        Ok(Self {
            cycle,
            storage_key: config.storage_key.clone(),
            store,
        })
    }

    /// Advance to the next theme and persist it.
    ///
    /// Returns the class edits that make `<body>` match.
    pub fn activate(&mut self) -> ClassChange {
        let name = self.cycle.advance().name.clone();
        self.store.save(&self.storage_key, &name);
        log::debug!("background theme -> {name}");
        self.cycle.class_change()
    }

    pub fn class_change(&self) -> ClassChange {
        self.cycle.class_change()
    }

    pub fn hint(&self) -> String {
        self.cycle.hint()
    }

    pub fn current(&self) -> &Theme {
        self.cycle.current()
    }

    pub fn index(&self) -> usize {
        self.cycle.index()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
