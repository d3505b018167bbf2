//! Error types for registry construction.

use thiserror::Error;

/// Error type for registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A descriptor kind name outside the four known kinds.
    #[error("unrecognized type kind '{kind}' for type '{type_name}'")]
    UnrecognizedKind {
        /// Kind name as received from upstream.
        kind: String,
        /// Type the kind was declared for.
        type_name: String,
    },
}

impl RegistryError {
    /// Creates an unrecognized-kind error.
    pub fn unrecognized_kind(kind: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnrecognizedKind {
            kind: kind.into(),
            type_name: type_name.into(),
        }
    }
}
