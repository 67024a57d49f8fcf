//! # backdrop
//!
//! Background theme switcher for documentation sites, compiled to WASM.
//!
//! A single button is appended to `<body>`. Each click moves to the next
//! theme in a fixed list, swaps the matching `theme-<name>` class on
//! `<body>`, and saves the theme name to `localStorage` so the next page load
//! restores it. The class styles themselves ship with the site's CSS.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme list and body class planning |
//! | [`state`] | Selection cursor and the [`state::toggle::ThemeToggle`] controller |
//! | [`config`] | Defaults and the optional inline JSON override |
//! | [`components`] | The Leptos button |
//! | [`util`] | `web-sys` glue for `<body>` and `localStorage` |
//! | [`error`] | Crate error type |

pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod theme;
pub mod util;


use crate::config::ToggleConfig;
use crate::state::toggle::ThemeToggle;
use crate::util::dom;
use crate::util::storage::LocalStorage;

/// Restore the saved theme and mount the toggle button into `<body>`.
///
/// Outside the browser build only the selection is restored.
pub fn mount(config: ToggleConfig) -> error::Result<()> {
    config.validate()?;
    let toggle = ThemeToggle::initialize(&config, LocalStorage)?;
    if let Err(e) = dom::apply_class_change(&toggle.class_change()) {
        log::warn!("background theme class restore failed: {e}");
    }

    #[cfg(feature = "csr")]
    {
        use crate::components::background_toggle::BackgroundToggle;
        use leptos::prelude::*;

        leptos::mount::mount_to_body(move || view! { <BackgroundToggle config=config toggle=toggle/> });
    }

    Ok(())
}

/// WASM entry point: install logging, then mount once the DOM is ready.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).unwrap_or_default();

    let ready = dom::when_ready(|| {
        if let Err(e) = mount(ToggleConfig::from_page()) {
            log::warn!("background toggle not mounted: {e}");
        }
    });
    if let Err(e) = ready {
        log::warn!("background toggle could not wait for page ready: {e}");
    }
}
