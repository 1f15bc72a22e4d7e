// ============================================================================
// domain/error.rs - BLOCK DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep them after the run)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid block name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid vendor prefix '{vendor}': {reason}")]
    InvalidVendor { vendor: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path escapes the theme root: {path}")]
    PathTraversal { path: String },

    #[error("Path must not be empty")]
    EmptyPath,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{}' cannot be used as a block name: {}", name, reason),
                "Use lowercase letters, digits and single hyphens".into(),
                "Start with a letter, e.g. hero-banner, pricing-table".into(),
            ],
            Self::InvalidVendor { vendor, .. } => vec![
                format!("'{}' cannot be used as a vendor prefix", vendor),
                "Vendor prefixes follow the same rules as block names".into(),
                "Example: --vendor acme".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } | Self::PathTraversal { .. } | Self::EmptyPath => vec![
                "block_directory must be a non-empty path relative to the theme root".into(),
                "Example: block_directory = \"resources/js/blocks\"".into(),
            ],
        }
    }
}
