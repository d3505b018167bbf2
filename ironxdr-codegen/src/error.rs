//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Registry-level error.
    #[error("registry error: {0}")]
    Registry(#[from] ironxdr_registry::RegistryError),

    /// Required configuration value missing.
    #[error("required configuration '{name}' not specified")]
    MissingConfiguration {
        /// Configuration key.
        name: String,
    },

    /// A requested or transitively referenced type has no registry entry.
    #[error("unknown type '{name}' requested or referenced during generation")]
    UnknownType {
        /// Type name.
        name: String,
    },

    /// An alias descriptor without a resolvable target reference.
    #[error("alias '{name}' has no resolvable target reference")]
    MissingTarget {
        /// Type name.
        name: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Creates a missing-configuration error.
    pub fn missing_configuration(name: impl Into<String>) -> Self {
        Self::MissingConfiguration { name: name.into() }
    }

    /// Creates an unknown-type error.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType { name: name.into() }
    }

    /// Creates a missing-target error.
    pub fn missing_target(name: impl Into<String>) -> Self {
        Self::MissingTarget { name: name.into() }
    }
}
