//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. It is
//! the serde view of the configuration file; [`AppConfig::to_block_config`]
//! validates it into the core's immutable `BlockConfig`.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `SAGEBLOCK_DEFAULT_VENDOR_PREFIX`,
//!    `SAGEBLOCK_TEMPLATES__STYLE_CSS`, ...
//! 3. Project config: `<theme>/config/sageblock.toml`, or `--config FILE`
//! 4. User config: `<config dir>/sageblock/config.toml`
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use sageblock_core::domain::{
    BlockConfig, DEFAULT_BLOCK_DIRECTORY, DEFAULT_VENDOR_PREFIX, TemplateKey,
};

use crate::error::{CliError, CliResult};

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SAGEBLOCK";

/// Project config location, relative to the theme root.
pub const PROJECT_CONFIG_PATH: &str = "config/sageblock.toml";

/// The file written by `sageblock publish`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# sageblock configuration
#
# Paths are relative to the theme root unless absolute.

# Vendor prefix used when `sageblock make` is run without --vendor.
# Blocks are registered as "<vendor>/<block-name>".
default_vendor_prefix = "vendor"

# Where block directories are created. Each block lands in
# <block_directory>/<vendor>/<block-name>/.
block_directory = "resources/js/blocks"

# Directory holding replacement default stubs (e.g. after
# `sageblock publish --stubs`). Unset uses the stubs shipped with sageblock.
# stub_directory = "stubs/blocks"

# Per-file stub overrides. Unset keys use the default stub.
[templates]
# block_json = "stubs/blocks/block.json.stub"
# index_js = "stubs/blocks/index.js.stub"
# editor_jsx = "stubs/blocks/editor.jsx.stub"
# save_jsx = "stubs/blocks/save.jsx.stub"
# editor_css = "stubs/blocks/editor.css.stub"
# style_css = "stubs/blocks/style.css.stub"
# view_js = "stubs/blocks/view.js.stub"

[output]
no_color = false
"#;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_vendor_prefix: String,
    pub block_directory: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stub_directory: Option<PathBuf>,
    pub templates: TemplatesConfig,
    pub output: OutputConfig,
}

/// `[templates]`: one optional override path per block file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_json: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_js: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_jsx: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_jsx: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_css: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_css: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_js: Option<PathBuf>,
}

impl TemplatesConfig {
    pub fn get(&self, key: TemplateKey) -> Option<&Path> {
        let path = match key {
            TemplateKey::BlockJson => &self.block_json,
            TemplateKey::IndexJs => &self.index_js,
            TemplateKey::EditorJsx => &self.editor_jsx,
            TemplateKey::SaveJsx => &self.save_jsx,
            TemplateKey::EditorCss => &self.editor_css,
            TemplateKey::StyleCss => &self.style_css,
            TemplateKey::ViewJs => &self.view_js,
        };
        path.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_vendor_prefix: DEFAULT_VENDOR_PREFIX.into(),
            block_directory: PathBuf::from(DEFAULT_BLOCK_DIRECTORY),
            stub_directory: None,
            templates: TemplatesConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// One configuration file the loader consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub path: PathBuf,
    /// `--config` files must exist; the others are optional.
    pub required: bool,
}

impl AppConfig {
    /// Load configuration: defaults, user file, project file, environment.
    pub fn load(config_file: Option<&Path>, theme_root: &Path) -> anyhow::Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&AppConfig::default()).context("Failed to build default config")?,
        );

        for source in Self::sources(config_file, theme_root) {
            debug!(
                source = source.label,
                path = %source.path.display(),
                exists = source.path.is_file(),
                "Config source"
            );
            builder = builder.add_source(
                File::from(source.path)
                    .format(FileFormat::Toml)
                    .required(source.required),
            );
        }

        let config: AppConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Configuration files in the order they are merged (later wins).
    pub fn sources(config_file: Option<&Path>, theme_root: &Path) -> Vec<ConfigSource> {
        let mut sources = Vec::with_capacity(2);

        if let Some(user) = Self::user_config_path() {
            sources.push(ConfigSource {
                label: "user",
                path: user,
                required: false,
            });
        }

        sources.push(match config_file {
            Some(path) => ConfigSource {
                label: "--config",
                path: path.to_path_buf(),
                required: true,
            },
            None => ConfigSource {
                label: "project",
                path: Self::project_config_path(theme_root),
                required: false,
            },
        });

        sources
    }

    /// `<theme>/config/sageblock.toml`.
    pub fn project_config_path(theme_root: &Path) -> PathBuf {
        theme_root.join(PROJECT_CONFIG_PATH)
    }

    /// Per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness.
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sageblock")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Validate into the core configuration.
    pub fn to_block_config(&self) -> CliResult<BlockConfig> {
        let mut block_config =
            BlockConfig::new(&self.default_vendor_prefix, &self.block_directory).map_err(|e| {
                CliError::ConfigError {
                    message: e.to_string(),
                    source: Some(Box::new(e)),
                }
            })?;

        if let Some(dir) = &self.stub_directory {
            block_config = block_config.with_stub_directory(dir);
        }
        for key in TemplateKey::ALL {
            if let Some(path) = self.templates.get(key) {
                block_config = block_config.with_override(key, path);
            }
        }

        Ok(block_config)
    }
}
