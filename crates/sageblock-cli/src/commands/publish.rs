//! `sageblock publish`: copy the default configuration, and optionally the
//! default stubs, into the theme so they can be edited.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use sageblock_adapters::{LocalFilesystem, default_stub_dir};
use sageblock_core::{application::Filesystem, domain::TemplateKey};

use crate::{
    cli::{GlobalArgs, PublishArgs},
    config::{AppConfig, DEFAULT_CONFIG_TOML},
    error::CliResult,
    output::OutputManager,
};

/// Where `--stubs` copies the stubs, relative to the theme root.
pub const PUBLISHED_STUBS_DIR: &str = "stubs/blocks";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum PublishStatus {
    Written,
    Overwritten,
    Skipped,
}

#[derive(Debug, Serialize)]
struct Published {
    path: PathBuf,
    status: PublishStatus,
}

#[instrument(skip_all, fields(force = args.force, stubs = args.stubs))]
pub fn execute(args: PublishArgs, global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let fs = LocalFilesystem::new();
    let published = publish_all(&fs, &global.theme_root, &default_stub_dir(), &args)?;

    if output.is_json() {
        output.json(&published)?;
        return Ok(());
    }

    for item in &published {
        let path = item.path.display();
        match item.status {
            PublishStatus::Written => output.success(&format!("Published {path}"))?,
            PublishStatus::Overwritten => output.success(&format!("Published {path} (overwritten)"))?,
            PublishStatus::Skipped => {
                output.warning(&format!("{path} already exists (use --force to overwrite)"))?
            }
        }
    }

    if args.stubs {
        output.info(&format!(
            "Set `stub_directory = \"{PUBLISHED_STUBS_DIR}\"` in config/sageblock.toml to use the published stubs"
        ))?;
    }
    Ok(())
}

fn publish_all(
    fs: &dyn Filesystem,
    theme_root: &Path,
    stub_dir: &Path,
    args: &PublishArgs,
) -> CliResult<Vec<Published>> {
    let mut published = Vec::new();

    let config_path = AppConfig::project_config_path(theme_root);
    published.push(publish_file(fs, config_path, DEFAULT_CONFIG_TOML, args.force)?);

    if args.stubs {
        let target_dir = theme_root.join(PUBLISHED_STUBS_DIR);
        for key in TemplateKey::ALL {
            let content = fs.read_to_string(&stub_dir.join(key.stub_name()))?;
            published.push(publish_file(
                fs,
                target_dir.join(key.stub_name()),
                &content,
                args.force,
            )?);
        }
    }

    Ok(published)
}

fn publish_file(
    fs: &dyn Filesystem,
    path: PathBuf,
    content: &str,
    force: bool,
) -> CliResult<Published> {
    let existed = fs.exists(&path);
    if existed && !force {
        debug!(path = %path.display(), "Already published, skipping");
        return Ok(Published {
            path,
            status: PublishStatus::Skipped,
        });
    }

    if let Some(parent) = path.parent() {
        fs.create_dir_all(parent)?;
    }
    fs.write_atomic(&path, content)?;

    Ok(Published {
        path,
        status: if existed {
            PublishStatus::Overwritten
        } else {
            PublishStatus::Written
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sageblock_adapters::MemoryFilesystem;

    fn stubbed_fs() -> MemoryFilesystem {
        let fs = MemoryFilesystem::new();
        for key in TemplateKey::ALL {
            fs.insert_file(Path::new("/pkg/stubs").join(key.stub_name()), key.file_name());
        }
        fs
    }

    fn args(force: bool, stubs: bool) -> PublishArgs {
        PublishArgs { force, stubs }
    }

    #[test]
    fn publishes_config_only_by_default() {
        let fs = stubbed_fs();
        let out = publish_all(&fs, Path::new("/theme"), Path::new("/pkg/stubs"), &args(false, false)).unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].status, PublishStatus::Written);
        assert_eq!(
            fs.read_file(Path::new("/theme/config/sageblock.toml")).as_deref(),
            Some(DEFAULT_CONFIG_TOML)
        );
    }

    #[test]
    fn publishes_stubs_when_asked() {
        let fs = stubbed_fs();
        let out = publish_all(&fs, Path::new("/theme"), Path::new("/pkg/stubs"), &args(false, true)).unwrap();

        assert_eq!(out.len(), 8);
        assert_eq!(
            fs.read_file(Path::new("/theme/stubs/blocks/view.js.stub")).as_deref(),
            Some("view.js")
        );
    }

    #[test]
    fn existing_files_are_skipped_without_force() {
        let fs = stubbed_fs();
        fs.insert_file("/theme/config/sageblock.toml", "# mine");

        let out = publish_all(&fs, Path::new("/theme"), Path::new("/pkg/stubs"), &args(false, false)).unwrap();
        assert_eq!(out[0].status, PublishStatus::Skipped);
        assert_eq!(
            fs.read_file(Path::new("/theme/config/sageblock.toml")).as_deref(),
            Some("# mine")
        );

        let out = publish_all(&fs, Path::new("/theme"), Path::new("/pkg/stubs"), &args(true, false)).unwrap();
        assert_eq!(out[0].status, PublishStatus::Overwritten);
        assert_eq!(
            fs.read_file(Path::new("/theme/config/sageblock.toml")).as_deref(),
            Some(DEFAULT_CONFIG_TOML)
        );
    }

    #[test]
    fn missing_stub_is_an_error() {
        let fs = MemoryFilesystem::new();
        let result = publish_all(&fs, Path::new("/theme"), Path::new("/pkg/stubs"), &args(false, true));
        assert_eq!(result.unwrap_err().exit_code(), 1);
    }
}
