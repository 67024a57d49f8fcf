//! Floating button that cycles the page background theme.

use leptos::prelude::*;

use crate::config::ToggleConfig;
use crate::state::toggle::ThemeToggle;
use crate::util::dom;
use crate::util::storage::LocalStorage;

#[cfg(feature = "csr")]
use gloo_timers::callback::Timeout;

#[cfg(test)]
#[path = "background_toggle_test.rs"]
mod background_toggle_test;

/// Inline `display` for the button. Unset until revealed so site CSS rules.
pub fn reveal_display(visible: bool) -> Option<&'static str> {
    visible.then_some("flex")
}

/// The background toggle button.
///
/// Each click advances `toggle`, re-applies the `<body>` theme class, and
/// refreshes the hover hint. Once `config.reveal_delay_ms` has elapsed the
/// button is forced visible with `display: flex`.
#[component]
pub fn BackgroundToggle(config: ToggleConfig, toggle: ThemeToggle<LocalStorage>) -> impl IntoView {
    let toggle = RwSignal::new(toggle);
    let visible = RwSignal::new(false);

    #[cfg(feature = "csr")]
    Timeout::new(config.reveal_delay_ms, move || visible.set(true)).forget();

    let on_click = move |_| {
        toggle.update(|t| {
            let change = t.activate();
            if let Err(e) = dom::apply_class_change(&change) {
                log::warn!("background theme class update failed: {e}");
            }
        });
    };

    view! {
        <button
            class=config.button_class
            aria-label=config.title
            title=move || toggle.with(ThemeToggle::hint)
            style:display=move || reveal_display(visible.get())
            on:click=on_click
        >
            {config.glyph}
        </button>
    }
}
