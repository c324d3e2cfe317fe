//! Error types for cliio

use thiserror::Error;

/// Main error type for cliio operations
#[derive(Error, Debug)]
pub enum CliIoError {
    /// Failure reported by an underlying byte channel
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A channel could not be attached because the handle is not a usable stream
    #[error("Invalid resource '{resource}': {reason}")]
    InvalidResource {
        /// Human-readable name of the rejected resource (usually a path)
        resource: String,
        /// Why the resource was rejected
        reason: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CliIoError {
    /// Build an [`CliIoError::InvalidResource`] from anything printable
    pub fn invalid_resource(resource: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::InvalidResource {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error came straight from a channel read or write
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
