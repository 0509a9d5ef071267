//! Error types for the movie catalog.
//!
//! Every failure a caller can see is one of three kinds: bad user input,
//! a filesystem problem during load/save, or a host setup problem.
//! Malformed records found while loading never reach the caller; see
//! `persist::RecordError`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// User input failed a precondition. The catalog is left unchanged.
    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl CatalogError {
    /// Create a validation error for one input field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CatalogError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        CatalogError::Io {
            message: err.to_string(),
            path: Some(path.into()),
            source: Some(err),
        }
    }

    /// True for errors the operator can fix by re-entering input.
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation { .. })
    }

    /// Process exit code a host should use when reporting this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CatalogError::Validation { .. } => 2,
            CatalogError::Io { .. } => 3,
            CatalogError::Config { .. } => 4,
        }
    }
}
