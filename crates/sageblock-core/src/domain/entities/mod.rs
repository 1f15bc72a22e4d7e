pub mod block;
pub mod common;
pub mod config;
pub mod generation;
pub mod render_context;

pub use block::{BlockLayout, BlockName, BlockRequest, PlannedFile, VendorPrefix};
pub use common::RelativePath;
pub use config::{BlockConfig, DEFAULT_BLOCK_DIRECTORY, DEFAULT_VENDOR_PREFIX, TemplateOverrides};
pub use generation::{FileOutcome, FileReport, GeneratedFile, GenerationReport};
pub use render_context::RenderContext;
