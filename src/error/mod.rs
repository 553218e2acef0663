// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cg application.
//!
//! The classification core is total and never fails. Errors only come from
//! the edges: loading configuration, discovering the repository and reading
//! its status.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cg operations.
#[derive(Error, Debug)]
pub enum CgError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("{0}")]
    Git(#[from] GitError),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path} (use --force to overwrite)")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Failed to read repository status: {message}")]
    StatusFailed { message: String },
}

/// Result type alias for cg operations.
pub type Result<T> = std::result::Result<T, CgError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CgError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/cg.toml"),
        };
        assert!(err.to_string().contains("/path/to/cg.toml"));
    }

    #[test]
    fn test_not_a_repository_message() {
        let err: CgError = GitError::NotARepository.into();
        assert_eq!(err.to_string(), "Not a git repository");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            key: "classify.rules".to_string(),
            message: "unclosed group".to_string(),
        };
        assert!(err.to_string().contains("classify.rules"));
        assert!(err.to_string().contains("unclosed group"));
    }

    #[test]
    fn test_context_wraps_message() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk on fire",
        ));
        let err = io.context("read stdin").unwrap_err();
        assert_eq!(err.to_string(), "read stdin: disk on fire");
    }
}
