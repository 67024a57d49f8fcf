//! Selection state for the background toggle.
//!
//! DESIGN
//! ======
//! `cycle` is the pure wrap-around index over a theme list. `toggle` adds the
//! persisted key and the store, and is the only place selection changes.

pub mod cycle;
pub mod toggle;
