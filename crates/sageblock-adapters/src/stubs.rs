//! Discovery of the default stub directory.
//!
//! The seven default stubs ship in the workspace's `stubs/` directory. At
//! runtime the first existing directory among these candidates is used:
//!
//! 1. **`$SAGEBLOCK_STUBS_DIR`**: explicit override, e.g. from `.env`
//! 2. **`<executable-dir>/stubs`**: stubs installed next to the binary
//! 3. **`<executable-dir>/../share/sageblock/stubs`**: FHS-style install
//! 4. **the source tree's `stubs/`**: `cargo run` and tests
//!
//! A theme can bypass discovery entirely with `stub_directory` in its
//! configuration, or by publishing the stubs and overriding individual keys.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

/// Environment variable naming a stub directory.
pub const STUBS_DIR_ENV: &str = "SAGEBLOCK_STUBS_DIR";

/// Return the first existing candidate stub directory.
///
/// Falls back to the source-tree path even when it does not exist, so that
/// every missing stub is reported as `TemplateNotFound` with a concrete path.
#[instrument]
pub fn default_stub_dir() -> PathBuf {
    let candidates = candidate_paths();

    for candidate in &candidates {
        if candidate.is_dir() {
            debug!(path = %candidate.display(), "Using stub directory");
            return candidate.clone();
        }
        debug!(path = %candidate.display(), "Stub directory candidate missing");
    }

    warn!(
        "no stub directory found; checked $SAGEBLOCK_STUBS_DIR, <exe>/stubs, \
         <exe>/../share/sageblock/stubs and the source tree"
    );
    source_tree_stubs()
}

/// Build the ordered list of candidate stub directories.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    if let Some(dir) = std::env::var_os(STUBS_DIR_ENV) {
        paths.push(PathBuf::from(dir));
    }

    if let Some(exe_dir) = exe_dir() {
        paths.push(exe_dir.join("stubs"));
        paths.push(exe_dir.join("..").join("share").join("sageblock").join("stubs"));
    }

    paths.push(source_tree_stubs());
    paths
}

/// `stubs/` at the workspace root.
pub fn source_tree_stubs() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("stubs")
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}
