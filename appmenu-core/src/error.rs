//! Error types for the appmenu crates.

use thiserror::Error;

/// Errors that can occur while deriving user identity from an access token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No access token is available; the user is anonymous.
    #[error("no access token available")]
    NotAuthenticated,

    /// The access token does not carry an expected claim.
    #[error("access token is missing claim '{0}'")]
    MissingClaim(String),
}

/// Errors that can occur in the menu component.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Identity derivation failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// No binding with the requested key was registered.
    #[error("no binding named '{0}' was registered")]
    MissingBinding(String),

    /// A binding with the requested key exists but has a different type.
    #[error("binding '{0}' has an unexpected type")]
    BindingType(String),

    /// A required service is missing from the service collection.
    #[error("service '{0}' is not registered")]
    MissingService(&'static str),

    /// The menu backend failed.
    #[error("menu backend error: {0}")]
    Backend(String),

    /// I/O error, e.g. while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The XDG base directories could not be determined.
    #[error("XDG base directories unavailable: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
}
