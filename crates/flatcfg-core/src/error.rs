//! Error types for configuration composition

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for configuration composition operations
#[derive(Debug, Error)]
pub enum FlatcfgError {
    /// Malformed or inconsistent option trees
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors surfaced by the discovery probe
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Errors raised by an [`Assembler`](crate::assemble::Assembler)
    /// implementation. These pass through the preset layers unchanged.
    #[error("Assembly error: {message}")]
    AssemblyError { message: String },
}

impl FlatcfgError {
    /// Create a configuration error with the given message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an assembly error with the given message
    pub fn assembly(message: impl Into<String>) -> Self {
        Self::AssemblyError {
            message: message.into(),
        }
    }
}
