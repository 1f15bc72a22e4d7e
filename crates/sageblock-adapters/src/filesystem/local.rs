//! Local filesystem adapter using std::fs.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use sageblock_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{BlockError, BlockResult},
};
use tempfile::{Builder, NamedTempFile};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
///
/// Writes go through a temporary file created next to the destination and
/// renamed over it, so a destination is never observed half-written. If the
/// rename fails the temporary file is dropped and removed.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }

    fn temp_file_for(&self, path: &Path) -> io::Result<NamedTempFile> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = Builder::new();
        builder.prefix(".sageblock-").suffix(".tmp");

        // NamedTempFile defaults to 0600; keep the mode of the file being
        // replaced, or the usual 0644 for new files.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(path)
                .map(|m| m.permissions().mode())
                .unwrap_or(0o644);
            builder.permissions(fs::Permissions::from_mode(mode));
        }

        builder.tempfile_in(dir)
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> BlockResult<String> {
        fs::read_to_string(path).map_err(|e| {
            ApplicationError::ReadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn create_dir_all(&self, path: &Path) -> BlockResult<()> {
        fs::create_dir_all(path).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to create directory: {e}"),
            }
            .into()
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> BlockResult<()> {
        let mut tmp = self
            .temp_file_for(path)
            .map_err(|e| map_write_error(path, e, "create temporary file"))?;

        tmp.write_all(content.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| map_write_error(path, e, "write temporary file"))?;

        trace!(tmp = %tmp.path().display(), dest = %path.display(), "Renaming into place");
        tmp.persist(path)
            .map_err(|e| map_write_error(path, e.error, "rename into place"))?;

        Ok(())
    }
}

fn map_write_error(path: &Path, e: io::Error, operation: &str) -> BlockError {
    ApplicationError::WriteFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
