//! Leptos UI components.

pub mod background_toggle;
