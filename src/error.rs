//! Error types for multidomain operations.
//!
//! This module defines [`MultidomainError`] and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Domain detection and path resolution never fail; they degrade to
//!   the shared defaults (`.env`, the storage root) instead
//! - `MultidomainError` covers the surfaces around them: loading
//!   `config/domain.yml` and rendering CLI output
//! - Use `anyhow::Error` (via `MultidomainError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for multidomain operations.
#[derive(Debug, Error)]
pub enum MultidomainError {
    /// Domain configuration file not found at expected location.
    #[error("Domain configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the domain configuration file.
    #[error("Failed to parse domain config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for multidomain operations.
pub type Result<T> = std::result::Result<T, MultidomainError>;
