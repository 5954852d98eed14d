//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the crosscut interception core
#[derive(Error, Debug)]
pub enum Error {
    /// A declared field constraint was violated before the target ran
    #[error("Validation failed for '{field}' ({constraint}): {message}")]
    Validation {
        /// The field that violated the constraint
        field: String,
        /// The constraint that was violated (e.g. "required", "max_length")
        constraint: String,
        /// Human-readable description of the violation
        message: String,
    },

    /// A business rule check in the rule chain failed
    #[error("Rule failed: {reason}")]
    Rule {
        /// The reason carried by the failing rule, unchanged
        reason: String,
    },

    /// The wrapped target operation failed; passed through unchanged
    #[error("Target operation failed: {message}")]
    Target {
        /// Description of the target failure
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Cache backend operation error
    ///
    /// Recovered inside the pipeline (treated as a miss on reads, logged
    /// on writes) and never surfaced from an invocation.
    #[error("Cache error: {message}")]
    Cache {
        /// Description of the cache error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Generic string-based error
    #[error("{0}")]
    String(String),
}

// Short-circuiting concern errors
impl Error {
    /// Create a validation error
    pub fn validation<F, C, M>(field: F, constraint: C, message: M) -> Self
    where
        F: Into<String>,
        C: Into<String>,
        M: Into<String>,
    {
        Self::Validation {
            field: field.into(),
            constraint: constraint.into(),
            message: message.into(),
        }
    }

    /// Create a rule failure
    pub fn rule<S: Into<String>>(reason: S) -> Self {
        Self::Rule {
            reason: reason.into(),
        }
    }
}

// Target error creation methods
impl Error {
    /// Create a target failure
    pub fn target<S: Into<String>>(message: S) -> Self {
        Self::Target {
            message: message.into(),
            source: None,
        }
    }

    /// Create a target failure with source
    pub fn target_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Target {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create a cache error
    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
