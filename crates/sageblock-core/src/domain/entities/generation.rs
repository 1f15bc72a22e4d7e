//! Per-file generation outcomes.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::TemplateKey;

/// A rendered file waiting to be written.
///
/// Lives only for the duration of one write; dropped once written or on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub key: TemplateKey,
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub content: String,
}

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    /// The file was written. `overwritten` is set when `force` replaced an
    /// existing file.
    Created { overwritten: bool },
    /// The destination existed and `force` was not given. Not an error.
    SkippedExisting,
    /// Template resolution, reading or writing failed for this file only.
    Failed { reason: String },
}

impl FileOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { overwritten: false } => f.write_str("created"),
            Self::Created { overwritten: true } => f.write_str("created (overwritten)"),
            Self::SkippedExisting => f.write_str("skipped (exists)"),
            Self::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// Outcome for one planned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub key: TemplateKey,
    pub destination: PathBuf,
    /// Template the content came from, when resolution succeeded.
    pub source: Option<PathBuf>,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Ordered outcomes of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub namespace: String,
    pub output_dir: PathBuf,
    pub files: Vec<FileReport>,
}

impl GenerationReport {
    pub fn new(namespace: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            namespace: namespace.into(),
            output_dir: output_dir.into(),
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, report: FileReport) {
        self.files.push(report);
    }

    pub fn created(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_created()).count()
    }

    pub fn skipped(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome == FileOutcome::SkippedExisting)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_failed()).count()
    }

    /// Skips are not failures.
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn outcome_for(&self, key: TemplateKey) -> Option<&FileOutcome> {
        self.files.iter().find(|f| f.key == key).map(|f| &f.outcome)
    }

    /// One-line summary, e.g. `7 created, 0 skipped, 0 failed`.
    pub fn summary(&self) -> String {
        format!(
            "{} created, {} skipped, {} failed",
            self.created(),
            self.skipped(),
            self.failed()
        )
    }
}
