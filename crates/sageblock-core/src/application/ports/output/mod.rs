//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sageblock-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::RenderContext;
use crate::error::BlockResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sageblock_adapters::filesystem::LocalFilesystem` (production)
/// - `sageblock_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> BlockResult<String>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> BlockResult<()>;

    /// Replace `path` with `content` atomically.
    ///
    /// Readers see either the previous file or the complete new one. On
    /// failure no partial file is left at `path`.
    fn write_atomic(&self, path: &Path, content: &str) -> BlockResult<()>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `sageblock_adapters::renderer::SimpleRenderer` (`{{TOKEN}}` substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, context: &RenderContext) -> BlockResult<String>;
}
