//! Block Generator - the "make a block" use case.
//!
//! For one request this service:
//! 1. Derives names and destination paths (aborts on an invalid name)
//! 2. Resolves, reads and renders the template for each file
//! 3. Writes each file atomically, or skips it if it already exists
//!
//! Steps 2 and 3 are isolated per file: a failure is recorded in the
//! [`GenerationReport`] and the remaining files are still attempted.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer},
        services::template_resolver::{ResolvedTemplate, TemplateResolver},
    },
    domain::{
        BlockConfig, BlockLayout, BlockRequest, FileOutcome, FileReport, GeneratedFile,
        GenerationReport, PlannedFile, RenderContext,
    },
    error::BlockResult,
};

/// What a dry run would do for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedWrite {
    #[serde(flatten)]
    pub file: PlannedFile,
    /// Absolute destination (theme root joined).
    pub target: PathBuf,
    pub template: Option<ResolvedTemplate>,
    /// Why the template could not be resolved.
    pub problem: Option<String>,
    pub exists: bool,
}

/// Block scaffolding service.
///
/// Holds its configuration and adapters explicitly; callers construct one
/// per run and pass it where it is needed.
pub struct BlockGenerator {
    config: BlockConfig,
    theme_root: PathBuf,
    resolver: TemplateResolver,
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
}

impl BlockGenerator {
    /// Create a generator rooted at `theme_root`.
    ///
    /// `stub_dir` holds the package default stubs; `config.stub_directory`
    /// takes precedence when set.
    pub fn new(
        config: BlockConfig,
        theme_root: impl Into<PathBuf>,
        stub_dir: impl Into<PathBuf>,
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        let theme_root = theme_root.into();
        let resolver = TemplateResolver::new(&config, theme_root.clone(), stub_dir);
        Self {
            config,
            theme_root,
            resolver,
            filesystem,
            renderer,
        }
    }

    /// Validate a request and compute its layout. No I/O.
    pub fn derive(&self, request: &BlockRequest) -> BlockResult<BlockLayout> {
        Ok(BlockLayout::derive(request, &self.config)?)
    }

    /// Resolve every template and check every destination without writing.
    #[instrument(skip_all, fields(block = %request.name))]
    pub fn plan(&self, request: &BlockRequest) -> BlockResult<(BlockLayout, Vec<PlannedWrite>)> {
        let layout = self.derive(request)?;

        let writes = layout
            .files
            .iter()
            .map(|file| {
                let target = self.theme_root.join(&file.destination);
                let (template, problem) =
                    match self.resolver.resolve(file.key, self.filesystem.as_ref()) {
                        Ok(resolved) => (Some(resolved), None),
                        Err(e) => (None, Some(e.to_string())),
                    };
                PlannedWrite {
                    exists: self.filesystem.exists(&target),
                    file: file.clone(),
                    target,
                    template,
                    problem,
                }
            })
            .collect();

        Ok((layout, writes))
    }

    /// Generate all block files for `request`.
    ///
    /// Returns `Err` only when the request itself is invalid, in which case
    /// nothing has been touched. Per-file failures are reported in the
    /// returned [`GenerationReport`].
    #[instrument(
        skip_all,
        fields(
            block = %request.name,
            vendor = request.vendor.as_deref().unwrap_or("<default>"),
            force = request.force
        )
    )]
    pub fn generate(&self, request: &BlockRequest) -> BlockResult<GenerationReport> {
        let layout = self.derive(request)?;
        let context = RenderContext::for_block(&layout);
        let output_dir = self.theme_root.join(&layout.output_dir);

        info!(
            namespace = %layout.namespace(),
            output_dir = %output_dir.display(),
            "Generating block"
        );

        let mut report = GenerationReport::new(layout.namespace(), output_dir);
        for file in &layout.files {
            report.push(self.generate_file(file, &context, request.force));
        }

        if report.has_failures() {
            warn!(summary = %report.summary(), "Block generated with failures");
        } else {
            info!(summary = %report.summary(), "Block generated");
        }
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn generate_file(&self, file: &PlannedFile, context: &RenderContext, force: bool) -> FileReport {
        let destination = self.theme_root.join(&file.destination);

        let resolved = match self.resolver.resolve(file.key, self.filesystem.as_ref()) {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(key = %file.key, error = %e, "Template resolution failed");
                return FileReport {
                    key: file.key,
                    destination,
                    source: None,
                    outcome: FileOutcome::Failed {
                        reason: e.to_string(),
                    },
                };
            }
        };

        let outcome = self
            .render(&resolved, &destination, context)
            .and_then(|generated| self.write(generated, force))
            .unwrap_or_else(|e| {
                warn!(key = %file.key, error = %e, "File generation failed");
                FileOutcome::Failed {
                    reason: e.to_string(),
                }
            });

        debug!(key = %file.key, outcome = %outcome, "File processed");
        FileReport {
            key: file.key,
            destination,
            source: Some(resolved.path),
            outcome,
        }
    }

    fn render(
        &self,
        resolved: &ResolvedTemplate,
        destination: &Path,
        context: &RenderContext,
    ) -> BlockResult<GeneratedFile> {
        let template = self.filesystem.read_to_string(&resolved.path)?;
        let content = self.renderer.render(&template, context)?;

        Ok(GeneratedFile {
            key: resolved.key,
            source_path: resolved.path.clone(),
            destination_path: destination.to_path_buf(),
            content,
        })
    }

    fn write(&self, file: GeneratedFile, force: bool) -> BlockResult<FileOutcome> {
        let existed = self.filesystem.exists(&file.destination_path);
        if existed && !force {
            debug!(path = %file.destination_path.display(), "Destination exists, skipping");
            return Ok(FileOutcome::SkippedExisting);
        }

        if let Some(parent) = file.destination_path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem
            .write_atomic(&file.destination_path, &file.content)?;

        Ok(FileOutcome::Created {
            overwritten: existed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, MockTemplateRenderer},
    };
    use crate::domain::{DomainError, TemplateKey};
    use crate::error::BlockError;

    fn substituting_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|template, ctx| Ok(ctx.render(template)));
        renderer
    }

    /// Every default stub exists and contains `{{BLOCK_NAMESPACE}}`.
    fn stubbed_fs(existing: bool) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_file().returning(|p| p.starts_with("/pkg/stubs"));
        fs.expect_read_to_string()
            .returning(|_| Ok("{{BLOCK_NAMESPACE}}".to_string()));
        fs.expect_exists().returning(move |_| existing);
        fs
    }

    fn generator(fs: MockFilesystem, config: BlockConfig) -> BlockGenerator {
        BlockGenerator::new(
            config,
            "/theme",
            "/pkg/stubs",
            Box::new(fs),
            Box::new(substituting_renderer()),
        )
    }

    #[test]
    fn creates_all_files_in_order() {
        let mut fs = stubbed_fs(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/theme/resources/js/blocks/acme/hero-banner"))
            .times(7)
            .returning(|_| Ok(()));
        fs.expect_write_atomic()
            .withf(|_, content| content == "acme/hero-banner")
            .times(7)
            .returning(|_, _| Ok(()));

        let request = BlockRequest::new("hero-banner").with_vendor("acme");
        let report = generator(fs, BlockConfig::default()).generate(&request).unwrap();

        assert_eq!(report.created(), 7);
        assert!(!report.has_failures());
        assert_eq!(report.namespace, "acme/hero-banner");
        let keys: Vec<_> = report.files.iter().map(|f| f.key).collect();
        assert_eq!(keys, TemplateKey::ALL);
    }

    #[test]
    fn existing_files_are_skipped_without_force() {
        let mut fs = stubbed_fs(true);
        fs.expect_create_dir_all().never();
        fs.expect_write_atomic().never();

        let report = generator(fs, BlockConfig::default())
            .generate(&BlockRequest::new("cta"))
            .unwrap();

        assert_eq!(report.skipped(), 7);
        assert!(!report.has_failures());
    }

    #[test]
    fn force_overwrites_existing_files() {
        let mut fs = stubbed_fs(true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_atomic().times(7).returning(|_, _| Ok(()));

        let report = generator(fs, BlockConfig::default())
            .generate(&BlockRequest::new("cta").with_force(true))
            .unwrap();

        assert!(report
            .files
            .iter()
            .all(|f| f.outcome == FileOutcome::Created { overwritten: true }));
    }

    #[test]
    fn invalid_name_touches_nothing() {
        // No expectations: any filesystem call panics.
        let fs = MockFilesystem::new();
        let result = generator(fs, BlockConfig::default()).generate(&BlockRequest::new("../x"));

        assert!(matches!(
            result,
            Err(BlockError::Domain(DomainError::InvalidName { .. }))
        ));
    }

    #[test]
    fn one_failed_write_does_not_stop_the_rest() {
        let mut fs = stubbed_fs(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_atomic().returning(|p, _| {
            if p.ends_with("view.js") {
                Err(ApplicationError::WriteFailed {
                    path: p.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        let report = generator(fs, BlockConfig::default())
            .generate(&BlockRequest::new("cta"))
            .unwrap();

        assert_eq!(report.created(), 6);
        assert_eq!(report.failed(), 1);
        assert!(matches!(
            report.outcome_for(TemplateKey::ViewJs),
            Some(FileOutcome::Failed { reason }) if reason.contains("disk full")
        ));
    }

    #[test]
    fn missing_override_fails_only_its_file() {
        let mut fs = stubbed_fs(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_atomic().times(6).returning(|_, _| Ok(()));

        let config = BlockConfig::default().with_override(TemplateKey::StyleCss, "nope/style.css");
        let report = generator(fs, config).generate(&BlockRequest::new("cta")).unwrap();

        assert_eq!(report.created(), 6);
        let style = &report.files[5];
        assert_eq!(style.key, TemplateKey::StyleCss);
        assert!(style.source.is_none());
        assert!(matches!(&style.outcome, FileOutcome::Failed { reason } if reason.contains("not found")));
    }

    #[test]
    fn plan_reports_without_writing() {
        let mut fs = stubbed_fs(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_atomic().never();

        let (layout, writes) = generator(fs, BlockConfig::default())
            .plan(&BlockRequest::new("cta"))
            .unwrap();

        assert_eq!(layout.namespace(), "vendor/cta");
        assert_eq!(writes.len(), 7);
        assert!(writes.iter().all(|w| w.template.is_some() && !w.exists));
        assert_eq!(
            writes[0].target,
            Path::new("/theme/resources/js/blocks/vendor/cta/block.json")
        );
    }
}
