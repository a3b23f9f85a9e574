//! Error types.
//!
//! Building and rendering tables never fails. Errors only come from the
//! configuration surface: parsing config documents and alignment names.

use thiserror::Error;

/// Errors produced while loading configuration or parsing user input.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration document could not be parsed.
    #[error("invalid table config: {0}")]
    Config(#[from] serde_yaml::Error),

    /// An alignment name was not one of `left`, `center` or `right`.
    #[error("unknown alignment '{0}' (expected left, center or right)")]
    UnknownAlignment(String),
}

/// Result alias for fallible configuration operations.
pub type Result<T> = std::result::Result<T, Error>;
