//! Error types for the format engine.

use thiserror::Error;

/// Errors raised while building checks from configuration.
///
/// All of these are fatal to the evaluation that triggered them. They are
/// never raised while evaluating an already built check.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A configured pattern is not a valid regular expression
    #[error("Invalid regex pattern [{pattern}]: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A required configuration object was absent
    #[error("{0}")]
    InvalidArgument(String),

    /// The configuration file is not valid YAML for the expected model
    #[error("Failed to parse configuration file: {0}")]
    Config(#[from] serde_yaml::Error),
}
