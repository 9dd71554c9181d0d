//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while validating client configuration.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// A required setting was not provided
    #[error("Missing configuration value: {field}")]
    Missing {
        /// Name of the missing setting
        field: String,
    },

    /// A setting was provided but cannot be used
    #[error("Invalid configuration for {field}: {message}")]
    Invalid {
        /// Name of the setting that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },
}

impl ConfigError {
    pub fn missing(field: &str) -> Self {
        Self::Missing { field: field.to_string() }
    }

    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::Invalid { field: field.to_string(), message: message.into() }
    }
}
