//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::TemplateKey;
use crate::error::ErrorCategory;

/// Errors that occur while resolving templates and writing block files.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Neither the configured override nor the default stub exists.
    #[error("Template for {key} not found at {path}")]
    TemplateNotFound { key: TemplateKey, path: PathBuf },

    /// The template exists but could not be read.
    #[error("Failed to read template {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// Creating the destination directory or writing the file failed.
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// A destination directory could not be created.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { key, path } => vec![
                format!("No template at {}", path.display()),
                format!(
                    "Fix or remove the '{}' entry under [templates] in your config",
                    key.as_str()
                ),
                "Run `sageblock publish --stubs` to copy the default stubs into the theme".into(),
            ],
            Self::ReadFailed { path, .. } => vec![
                format!("Check that {} is a readable text file", path.display()),
            ],
            Self::WriteFailed { path, .. } | Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::ReadFailed { .. } | Self::WriteFailed { .. } | Self::FilesystemError { .. } => {
                ErrorCategory::Io
            }
        }
    }
}
