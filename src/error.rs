//! Error types for Multipane Shop
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// Two catalog entries share a name
    #[snafu(display("Duplicate product name in catalog: {name}"))]
    DuplicateProduct { name: String },

    /// A catalog entry has an empty name
    #[snafu(display("Product at position {position} has an empty name"))]
    EmptyProductName { position: usize },

    /// Route path matches neither `list` nor `detail/{name}`
    #[snafu(display("Unknown route: {path}"))]
    UnknownRoute { path: String },

    /// Route parameter is not valid percent-encoded UTF-8
    #[snafu(display("Invalid route parameter in {path}"))]
    InvalidRouteParam {
        path: String,
        source: std::str::Utf8Error,
    },
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
