use crate::boundary::BoundaryWarning;
use thiserror::Error;

/// Unified error type for verscout operations
#[derive(Error, Debug)]
pub enum VerscoutError {
    #[error("{0}")]
    NotFound(#[from] BoundaryWarning),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in verscout
pub type Result<T> = std::result::Result<T, VerscoutError>;

impl VerscoutError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VerscoutError::Config(msg.into())
    }

    /// Create an invalid version error for the offending input
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        VerscoutError::InvalidVersion(msg.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        VerscoutError::Repository(msg.into())
    }

    /// The boundary condition carried by this error, if any
    pub fn boundary(&self) -> Option<BoundaryWarning> {
        match self {
            VerscoutError::NotFound(warning) => Some(*warning),
            _ => None,
        }
    }

    /// Whether this is an expected "nothing to report" condition
    pub fn is_not_found(&self) -> bool {
        self.boundary().is_some()
    }
}
