//! Error types for filter construction, key descriptors and configuration.
//!
//! The accumulator itself never fails: malformed configuration handed to the
//! lenient builders is normalised to documented defaults. These errors are
//! only produced by the strict helpers.

use thiserror::Error;

/// Errors produced by the strict constructors and parsers of this crate.
#[derive(Debug, Error)]
pub enum KeyInputError {
    /// The acceptance pattern did not compile.
    #[error("Invalid acceptance pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A key descriptor such as `"Ctrl+x"` could not be parsed.
    #[error("Invalid key descriptor: {0}")]
    InvalidDescriptor(String),

    /// A serialised configuration could not be decoded.
    #[cfg(feature = "wasm")]
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl KeyInputError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        KeyInputError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        }
    }

    /// Create an invalid descriptor error.
    pub fn invalid_descriptor(reason: impl Into<String>) -> Self {
        KeyInputError::InvalidDescriptor(reason.into())
    }
}

/// Result type for key input operations.
pub type KeyInputResult<T> = Result<T, KeyInputError>;
