//! Configuration errors
//!
//! Parsing, resolution, projection and building never fail; only
//! configuration can be rejected.

/// Errors raised while configuring a paneling route
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelingError {
    #[error("invalid extras separator {0:?}: must not be '/', '=' or whitespace")]
    InvalidSeparator(char),

    #[error("invalid panel name {0:?}: must be non-empty and contain no '/'")]
    InvalidPanelName(String),
}

pub type Result<T> = std::result::Result<T, PanelingError>;
