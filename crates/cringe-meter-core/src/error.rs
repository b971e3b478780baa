//! Error types for cringe-meter-core.
//!
//! The analysis engine itself is total — every input produces a valid
//! bounded report — so errors only arise from configuration loading and
//! category-pinned generation against an injected lexicon.

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

/// Errors that can occur during sample generation.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The lexicon has no template pool for the requested category.
    #[error("no templates for category: {name}. Use: {available}")]
    UnknownCategory {
        /// The category that was requested.
        name: String,
        /// Comma-separated list of categories the lexicon does cover.
        available: String,
    },
}

/// Result type alias using [`GeneratorError`].
pub type GeneratorResult<T> = Result<T, GeneratorError>;
