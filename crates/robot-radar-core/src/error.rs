//! Error types for robot-radar-core.
//!
//! Scoring itself is infallible: input that is too short to judge yields
//! `None` from [`crate::detector::analyze`], not an error.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from looking up a built-in sample text.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SampleError {
    /// An unknown sample name was provided.
    #[error("unknown sample: {name}. Use: {available}")]
    Unknown {
        /// The sample name that was requested.
        name: String,
        /// Comma-separated list of available sample names.
        available: String,
    },
}
