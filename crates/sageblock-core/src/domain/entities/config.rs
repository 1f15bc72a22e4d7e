//! Generator configuration value.
//!
//! [`BlockConfig`] is built once at startup (the CLI layers defaults, config
//! files and environment into it) and is read-only afterwards. Every field is
//! validated on construction, so holding a `BlockConfig` means the vendor
//! prefix is a valid slug and the block directory is relative.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::{
    entities::{block::VendorPrefix, common::RelativePath},
    error::DomainError,
    value_objects::TemplateKey,
};

pub const DEFAULT_VENDOR_PREFIX: &str = "vendor";
pub const DEFAULT_BLOCK_DIRECTORY: &str = "resources/js/blocks";

/// Per-key template override paths. Keys without an entry use the default stub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateOverrides(BTreeMap<TemplateKey, PathBuf>);

impl TemplateOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: TemplateKey, path: impl Into<PathBuf>) {
        self.0.insert(key, path.into());
    }

    pub fn get(&self, key: TemplateKey) -> Option<&Path> {
        self.0.get(&key).map(PathBuf::as_path)
    }
}

/// Immutable generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockConfig {
    pub default_vendor_prefix: VendorPrefix,
    pub block_directory: RelativePath,
    /// Directory holding replacement default stubs. `None` uses the stubs
    /// shipped with the package.
    pub stub_directory: Option<PathBuf>,
    pub templates: TemplateOverrides,
}

impl BlockConfig {
    pub fn new(
        default_vendor_prefix: &str,
        block_directory: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            default_vendor_prefix: VendorPrefix::parse(default_vendor_prefix)?,
            block_directory: RelativePath::try_new(block_directory)?,
            stub_directory: None,
            templates: TemplateOverrides::new(),
        })
    }

    pub fn with_stub_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stub_directory = Some(dir.into());
        self
    }

    pub fn with_override(mut self, key: TemplateKey, path: impl Into<PathBuf>) -> Self {
        self.templates.set(key, path);
        self
    }
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            default_vendor_prefix: VendorPrefix(DEFAULT_VENDOR_PREFIX.to_owned()),
            block_directory: RelativePath(PathBuf::from(DEFAULT_BLOCK_DIRECTORY)),
            stub_directory: None,
            templates: TemplateOverrides::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_package_config() {
        let cfg = BlockConfig::default();
        assert_eq!(cfg.default_vendor_prefix.as_str(), "vendor");
        assert_eq!(cfg.block_directory.as_path(), Path::new("resources/js/blocks"));
        assert!(TemplateKey::ALL.iter().all(|k| cfg.templates.get(*k).is_none()));
        assert!(cfg.stub_directory.is_none());
    }

    #[test]
    fn new_rejects_absolute_block_directory() {
        assert!(matches!(
            BlockConfig::new("acme", "/var/www/blocks"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn new_rejects_empty_block_directory() {
        assert!(matches!(
            BlockConfig::new("acme", ""),
            Err(DomainError::EmptyPath)
        ));
    }

    #[test]
    fn new_rejects_invalid_vendor() {
        assert!(BlockConfig::new("Acme", "blocks").is_err());
    }

    #[test]
    fn overrides_are_per_key() {
        let cfg = BlockConfig::default().with_override(TemplateKey::StyleCss, "stubs/style.css");
        assert_eq!(
            cfg.templates.get(TemplateKey::StyleCss),
            Some(Path::new("stubs/style.css"))
        );
        assert_eq!(cfg.templates.get(TemplateKey::BlockJson), None);
    }
}
