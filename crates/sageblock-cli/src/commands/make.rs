//! Implementation of the `sageblock make` command.
//!
//! Responsibility: turn CLI arguments into a `BlockRequest`, run the core
//! block generator, and display one line per file. No business logic lives
//! here.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use sageblock_adapters::{LocalFilesystem, SimpleRenderer, default_stub_dir};
use sageblock_core::{
    application::{BlockGenerator, PlannedWrite},
    domain::{BlockRequest, FileOutcome, GenerationReport},
};

use crate::{
    cli::{GlobalArgs, MakeArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sageblock make` command.
///
/// 1. Take the block name from the argument, or prompt for it
/// 2. Validate configuration into the core `BlockConfig`
/// 3. Plan (`--dry-run`) or generate the seven block files
/// 4. Report per-file outcomes; fail if any file could not be written
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(
    args: MakeArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let name = match args.name {
        Some(name) => name,
        None => prompt_name()?,
    };

    let mut request = BlockRequest::new(name).with_force(args.force);
    if let Some(vendor) = args.vendor {
        request = request.with_vendor(vendor);
    }

    let block_config = config.to_block_config()?;
    let stub_dir = default_stub_dir();
    debug!(stub_dir = %stub_dir.display(), theme_root = %global.theme_root.display(), "Building generator");

    let generator = BlockGenerator::new(
        block_config,
        global.theme_root.clone(),
        stub_dir,
        Box::new(LocalFilesystem::new()),
        Box::new(SimpleRenderer::new()),
    );

    if args.dry_run {
        let (layout, plan) = generator.plan(&request)?;
        let namespace = layout.namespace();
        if output.is_json() {
            output.json(&DryRun {
                namespace: &namespace,
                output_dir: &global.theme_root.join(&layout.output_dir),
                files: &plan,
            })?;
        } else {
            show_plan(&namespace, &plan, &global.theme_root, args.force, output)?;
        }
        return Ok(());
    }

    let report = generator.generate(&request)?;
    info!(namespace = %report.namespace, summary = %report.summary(), "make finished");

    if output.is_json() {
        output.json(&report)?;
    } else {
        show_report(&report, &global.theme_root, output)?;
    }

    if report.has_failures() {
        return Err(CliError::GenerationFailed {
            failed: report.failed(),
            total: report.files.len(),
        });
    }
    Ok(())
}

#[derive(Serialize)]
struct DryRun<'a> {
    namespace: &'a str,
    output_dir: &'a Path,
    files: &'a [PlannedWrite],
}

// ── Name prompt ───────────────────────────────────────────────────────────────

fn missing_name() -> CliError {
    CliError::InvalidInput {
        message: "block name is required, e.g. `sageblock make hero-banner`".into(),
        source: None,
    }
}

/// Ask for the block name on an interactive terminal.
#[cfg(feature = "interactive")]
fn prompt_name() -> CliResult<String> {
    use std::io::{self, IsTerminal};

    use dialoguer::Input;
    use sageblock_core::domain::BlockName;

    if !io::stdin().is_terminal() {
        return Err(missing_name());
    }

    Input::<String>::new()
        .with_prompt("Block name")
        .validate_with(|input: &String| -> Result<(), String> {
            BlockName::parse(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()
        .map_err(|e| {
            let err = io::Error::from(e);
            if err.kind() == io::ErrorKind::Interrupted {
                CliError::Cancelled
            } else {
                CliError::IoError {
                    message: "failed to read block name".into(),
                    source: err,
                }
            }
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt_name() -> CliResult<String> {
    Err(missing_name())
}

// ── Display ───────────────────────────────────────────────────────────────────

/// `path` relative to the theme root when it lies below it.
fn display_path<'a>(theme_root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(theme_root).unwrap_or(path)
}

fn show_report(
    report: &GenerationReport,
    theme_root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    output.header(&format!(
        "Block {} in {}",
        report.namespace,
        display_path(theme_root, &report.output_dir).display()
    ))?;

    for file in &report.files {
        let line = format!(
            "{}: {}",
            display_path(theme_root, &file.destination).display(),
            file.outcome
        );
        match file.outcome {
            FileOutcome::Created { .. } => output.success(&line)?,
            FileOutcome::SkippedExisting => output.warning(&line)?,
            FileOutcome::Failed { .. } => output.error(&line)?,
        }
    }

    output.print("")?;
    output.print(&report.summary())?;
    if report.skipped() > 0 && report.failed() == 0 {
        output.info("Re-run with --force to overwrite existing files")?;
    }
    Ok(())
}

/// What `make` would do to one file.
fn planned_action(write: &PlannedWrite, force: bool) -> String {
    match (&write.problem, write.exists) {
        (Some(problem), _) => format!("would fail: {problem}"),
        (None, true) if force => "would overwrite".to_owned(),
        (None, true) => "would skip (exists)".to_owned(),
        (None, false) => "would create".to_owned(),
    }
}

fn show_plan(
    namespace: &str,
    plan: &[PlannedWrite],
    theme_root: &Path,
    force: bool,
    output: &OutputManager,
) -> CliResult<()> {
    output.header(&format!("Dry run: block {namespace}"))?;
    for write in plan {
        output.print(&format!(
            "  {}: {}",
            display_path(theme_root, &write.target).display(),
            planned_action(write, force)
        ))?;
        if let Some(template) = &write.template {
            output.print(&format!(
                "      from {} ({})",
                template.path.display(),
                template.origin
            ))?;
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use sageblock_core::{
        application::{ResolvedTemplate, TemplateOrigin},
        domain::{PlannedFile, TemplateKey},
    };

    fn write(exists: bool, problem: Option<&str>) -> PlannedWrite {
        let key = TemplateKey::StyleCss;
        PlannedWrite {
            file: PlannedFile {
                key,
                file_name: key.file_name(),
                destination: PathBuf::from("blocks/acme/cta/style.css"),
            },
            target: PathBuf::from("/theme/blocks/acme/cta/style.css"),
            template: problem.is_none().then(|| ResolvedTemplate {
                key,
                path: PathBuf::from("/pkg/stubs/style.css.stub"),
                origin: TemplateOrigin::Default,
            }),
            problem: problem.map(str::to_owned),
            exists,
        }
    }

    #[test]
    fn display_path_strips_theme_root() {
        let root = Path::new("/theme");
        assert_eq!(
            display_path(root, Path::new("/theme/blocks/acme/cta/block.json")),
            Path::new("blocks/acme/cta/block.json")
        );
        assert_eq!(
            display_path(root, Path::new("/elsewhere/x")),
            Path::new("/elsewhere/x")
        );
    }

    #[test]
    fn display_path_handles_current_dir_root() {
        let root = Path::new(".");
        assert_eq!(
            display_path(root, &root.join("blocks/cta/index.js")),
            Path::new("blocks/cta/index.js")
        );
    }

    #[test]
    fn planned_actions() {
        assert_eq!(planned_action(&write(false, None), false), "would create");
        assert_eq!(planned_action(&write(true, None), false), "would skip (exists)");
        assert_eq!(planned_action(&write(true, None), true), "would overwrite");
        assert_eq!(
            planned_action(&write(false, Some("template not found")), true),
            "would fail: template not found"
        );
    }

    #[test]
    fn missing_name_is_a_user_error() {
        assert_eq!(missing_name().exit_code(), 2);
    }
}
