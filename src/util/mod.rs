//! Browser glue kept apart from the selection logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web-sys` lives here behind the `csr` feature.
//! Native builds get no-op fallbacks so state and config stay testable.

pub mod dom;
pub mod storage;
