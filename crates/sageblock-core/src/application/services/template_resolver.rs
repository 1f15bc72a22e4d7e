//! Template resolution: configured override first, then the default stub.

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{BlockConfig, TemplateKey, TemplateOverrides},
    error::BlockResult,
};

/// Where a resolved template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateOrigin {
    Override,
    Default,
}

impl std::fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Override => f.write_str("override"),
            Self::Default => f.write_str("default"),
        }
    }
}

/// A template file chosen for one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTemplate {
    pub key: TemplateKey,
    pub path: PathBuf,
    pub origin: TemplateOrigin,
}

/// Maps a [`TemplateKey`] to the template file to render.
///
/// Resolution order:
/// 1. `templates.<key>` from the configuration. If it is set but the file is
///    missing, resolution fails; the default stub is *not* used in its place.
/// 2. `<stub_dir>/<file_name>.stub`.
///
/// Relative paths (overrides and `stub_directory`) resolve against the theme
/// root.
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    theme_root: PathBuf,
    stub_dir: PathBuf,
    overrides: TemplateOverrides,
}

impl TemplateResolver {
    /// `default_stub_dir` is used unless the configuration names its own
    /// `stub_directory`.
    pub fn new(
        config: &BlockConfig,
        theme_root: impl Into<PathBuf>,
        default_stub_dir: impl Into<PathBuf>,
    ) -> Self {
        let theme_root = theme_root.into();
        let stub_dir = match &config.stub_directory {
            Some(dir) => theme_root.join(dir),
            None => default_stub_dir.into(),
        };

        Self {
            theme_root,
            stub_dir,
            overrides: config.templates.clone(),
        }
    }

    /// Path that would be used for `key`. Performs no I/O.
    pub fn candidate(&self, key: TemplateKey) -> ResolvedTemplate {
        match self.overrides.get(key) {
            Some(path) => ResolvedTemplate {
                key,
                path: self.theme_root.join(path),
                origin: TemplateOrigin::Override,
            },
            None => ResolvedTemplate {
                key,
                path: self.stub_dir.join(key.stub_name()),
                origin: TemplateOrigin::Default,
            },
        }
    }

    /// Resolve `key` to an existing template file.
    pub fn resolve(&self, key: TemplateKey, fs: &dyn Filesystem) -> BlockResult<ResolvedTemplate> {
        let candidate = self.candidate(key);

        if !fs.is_file(&candidate.path) {
            return Err(ApplicationError::TemplateNotFound {
                key,
                path: candidate.path,
            }
            .into());
        }

        debug!(
            key = %key,
            origin = ?candidate.origin,
            path = %candidate.path.display(),
            "Template resolved"
        );
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use crate::application::ports::MockFilesystem;
    use crate::error::BlockError;

    fn fs_with_files(files: &'static [&'static str]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file()
            .returning(move |p| files.iter().any(|f| p == Path::new(f)));
        fs
    }

    #[test]
    fn default_stub_when_no_override() {
        let fs = fs_with_files(&["/pkg/stubs/block.json.stub"]);
        let resolver = TemplateResolver::new(&BlockConfig::default(), "/theme", "/pkg/stubs");

        let resolved = resolver.resolve(TemplateKey::BlockJson, &fs).unwrap();
        assert_eq!(resolved.path, Path::new("/pkg/stubs/block.json.stub"));
        assert_eq!(resolved.origin, TemplateOrigin::Default);
    }

    #[test]
    fn override_resolves_against_theme_root() {
        let fs = fs_with_files(&["/theme/stubs/custom.css"]);
        let config = BlockConfig::default().with_override(TemplateKey::StyleCss, "stubs/custom.css");
        let resolver = TemplateResolver::new(&config, "/theme", "/pkg/stubs");

        let resolved = resolver.resolve(TemplateKey::StyleCss, &fs).unwrap();
        assert_eq!(resolved.path, Path::new("/theme/stubs/custom.css"));
        assert_eq!(resolved.origin, TemplateOrigin::Override);
    }

    #[test]
    fn absolute_override_is_used_as_is() {
        let fs = fs_with_files(&["/shared/view.js"]);
        let config = BlockConfig::default().with_override(TemplateKey::ViewJs, "/shared/view.js");
        let resolver = TemplateResolver::new(&config, "/theme", "/pkg/stubs");

        let resolved = resolver.resolve(TemplateKey::ViewJs, &fs).unwrap();
        assert_eq!(resolved.path, Path::new("/shared/view.js"));
    }

    #[test]
    fn missing_override_does_not_fall_back() {
        let fs = fs_with_files(&["/pkg/stubs/style.css.stub"]);
        let config = BlockConfig::default().with_override(TemplateKey::StyleCss, "missing.css");
        let resolver = TemplateResolver::new(&config, "/theme", "/pkg/stubs");

        let err = resolver.resolve(TemplateKey::StyleCss, &fs).unwrap_err();
        assert!(matches!(
            err,
            BlockError::Application(ApplicationError::TemplateNotFound { key: TemplateKey::StyleCss, .. })
        ));
    }

    #[test]
    fn missing_default_is_not_found() {
        let fs = fs_with_files(&[]);
        let resolver = TemplateResolver::new(&BlockConfig::default(), "/theme", "/pkg/stubs");
        assert!(resolver.resolve(TemplateKey::IndexJs, &fs).is_err());
    }

    #[test]
    fn configured_stub_directory_replaces_package_stubs() {
        let config = BlockConfig::default().with_stub_directory("stubs/blocks");
        let resolver = TemplateResolver::new(&config, "/theme", "/pkg/stubs");

        assert_eq!(
            resolver.candidate(TemplateKey::EditorJsx).path,
            Path::new("/theme/stubs/blocks/editor.jsx.stub")
        );
    }
}
