//! Unified error handling for sageblock core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for sageblock core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BlockError {
    /// Errors from the domain layer (invalid names, paths, keys).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (templates, filesystem).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl BlockError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            // Every domain error is a rejected input value.
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Io,
}

/// Convenient result type alias.
pub type BlockResult<T> = Result<T, BlockError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TemplateKey;

    #[test]
    fn domain_errors_keep_their_message() {
        let err: BlockError = DomainError::InvalidName {
            name: "X".into(),
            reason: "uppercase".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Invalid block name 'X': uppercase");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn template_not_found_is_not_found() {
        let err: BlockError = ApplicationError::TemplateNotFound {
            key: TemplateKey::BlockJson,
            path: "/x/block.json.stub".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("block_json")));
    }
}
