//! Error handling for the paramdoc extraction library.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. It uses `thiserror` for easy
//! error handling and implements conversions from common error types.
//!
//! # Examples
//!
//! ```
//! use paramdoc_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     // Operations that might fail...
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type for paramdoc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for paramdoc operations
#[derive(Debug, Error)]
pub enum Error {
    /// A handler parameter declares a type the reflection provider does not know.
    ///
    /// The resolver recovers from this by skipping the parameter.
    #[error("Cannot resolve type '{type_name}' of parameter '${parameter}'")]
    UnresolvableParameterType {
        /// Formal parameter name
        parameter: String,
        /// Declared type name
        type_name: String,
    },

    /// Neither a request type nor the handler itself carries a documentation block
    #[error("No documentation source found for endpoint {endpoint}")]
    NoDocumentationSource {
        /// Display form of the endpoint
        endpoint: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Metadata error
    #[error("Metadata error: {0}")]
    Metadata(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new metadata error
    pub fn metadata<S: Into<String>>(msg: S) -> Self {
        Self::Metadata(msg.into())
    }

    /// Returns true if the error only affects a single handler parameter
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnresolvableParameterType { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_documentation_source_names_endpoint() {
        let err = Error::NoDocumentationSource {
            endpoint: "POST /posts (PostController@store)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No documentation source found for endpoint POST /posts (PostController@store)"
        );
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_unresolvable_type_is_recoverable() {
        let err = Error::UnresolvableParameterType {
            parameter: "request".to_string(),
            type_name: "App\\Missing".to_string(),
        };
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("$request"));
    }
}
