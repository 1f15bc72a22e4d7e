//! Block naming and output layout.
//!
//! A [`BlockRequest`] carries raw user input. [`BlockLayout::derive`] turns it
//! into validated names plus the deterministic set of destination paths; it
//! is the only place those paths are computed.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    entities::config::BlockConfig, error::DomainError, validation::DomainValidator,
    value_objects::TemplateKey,
};

/// A validated block slug, e.g. `hero-banner`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BlockName(pub(crate) String);

impl BlockName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        DomainValidator::validate_block_name(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated vendor namespace, e.g. `acme`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VendorPrefix(pub(crate) String);

impl VendorPrefix {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        DomainValidator::validate_vendor(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VendorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw request to scaffold one block.
///
/// Constructed from command input, validated by [`BlockLayout::derive`],
/// then consumed by a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRequest {
    pub name: String,
    pub vendor: Option<String>,
    pub force: bool,
}

impl BlockRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vendor: None,
            force: false,
        }
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// One file the generator will produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedFile {
    pub key: TemplateKey,
    pub file_name: &'static str,
    /// Path relative to the theme root.
    pub destination: PathBuf,
}

/// Where a block's files go, derived from a request and the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockLayout {
    pub name: BlockName,
    pub vendor: VendorPrefix,
    /// `block_directory/<vendor>/<name>`, relative to the theme root.
    pub output_dir: PathBuf,
    pub files: Vec<PlannedFile>,
}

impl BlockLayout {
    /// Validate a request and compute its output directory and file set.
    ///
    /// Deterministic: the same request and configuration always produce the
    /// same layout. Performs no I/O.
    pub fn derive(request: &BlockRequest, config: &BlockConfig) -> Result<Self, DomainError> {
        let name = BlockName::parse(&request.name)?;
        let vendor = match request.vendor.as_deref() {
            Some(raw) => VendorPrefix::parse(raw)?,
            None => config.default_vendor_prefix.clone(),
        };

        let output_dir = config
            .block_directory
            .join(vendor.as_str())?
            .join(name.as_str())?
            .into_path_buf();

        let files = TemplateKey::ALL
            .into_iter()
            .map(|key| PlannedFile {
                key,
                file_name: key.file_name(),
                destination: output_dir.join(key.file_name()),
            })
            .collect();

        Ok(Self {
            name,
            vendor,
            output_dir,
            files,
        })
    }

    /// The `vendor/name` identifier registered with the block editor.
    pub fn namespace(&self) -> String {
        format!("{}/{}", self.vendor, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn config() -> BlockConfig {
        BlockConfig::default()
    }

    #[test]
    fn derive_builds_vendor_scoped_directory() {
        let request = BlockRequest::new("hero-banner").with_vendor("acme");
        let layout = BlockLayout::derive(&request, &config()).unwrap();

        assert_eq!(layout.output_dir, Path::new("resources/js/blocks/acme/hero-banner"));
        assert_eq!(layout.namespace(), "acme/hero-banner");
    }

    #[test]
    fn derive_falls_back_to_default_vendor() {
        let layout = BlockLayout::derive(&BlockRequest::new("cta"), &config()).unwrap();
        assert_eq!(layout.vendor.as_str(), "vendor");
        assert_eq!(layout.output_dir, Path::new("resources/js/blocks/vendor/cta"));
    }

    #[test]
    fn derive_lists_the_seven_files_in_order() {
        let layout = BlockLayout::derive(&BlockRequest::new("cta"), &config()).unwrap();
        let names: Vec<_> = layout.files.iter().map(|f| f.file_name).collect();
        assert_eq!(
            names,
            [
                "block.json",
                "index.js",
                "editor.jsx",
                "save.jsx",
                "editor.css",
                "style.css",
                "view.js"
            ]
        );
        assert_eq!(
            layout.files[0].destination,
            Path::new("resources/js/blocks/vendor/cta/block.json")
        );
    }

    #[test]
    fn derive_is_deterministic() {
        let request = BlockRequest::new("hero-banner").with_vendor("acme");
        assert_eq!(
            BlockLayout::derive(&request, &config()).unwrap(),
            BlockLayout::derive(&request, &config()).unwrap()
        );
    }

    #[test]
    fn derive_rejects_invalid_names() {
        for name in ["", "../x", "a/b"] {
            assert!(matches!(
                BlockLayout::derive(&BlockRequest::new(name), &config()),
                Err(DomainError::InvalidName { .. })
            ));
        }
    }

    #[test]
    fn derive_rejects_invalid_vendor() {
        let request = BlockRequest::new("cta").with_vendor("../evil");
        assert!(matches!(
            BlockLayout::derive(&request, &config()),
            Err(DomainError::InvalidVendor { .. })
        ));
    }
}
