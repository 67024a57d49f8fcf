//! Crate error type.
//!
//! Nothing here is ever surfaced to the reader of the page. Browser glue
//! returns these so callers can log the failure and keep going.

/// Errors raised while configuring or mounting the background toggle.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid config json: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error("config must list at least one theme")]
    NoThemes,
    #[error("theme name must not be empty")]
    EmptyThemeName,
    #[error("duplicate theme name: {0}")]
    DuplicateTheme(String),
    #[error("browser object unavailable: {0}")]
    Unavailable(&'static str),
    #[error("dom call rejected: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, Error>;
