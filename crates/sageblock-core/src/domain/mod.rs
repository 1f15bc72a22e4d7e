//! Core domain layer for sageblock.
//!
//! Pure block logic: names, template keys, output layout, placeholder
//! substitution and per-file outcomes. All I/O is handled via ports defined
//! in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: no filesystem access, not even `exists()`
//! - **Immutable values**: every domain object is `Clone + PartialEq`
//! - **Validated construction**: holding a `BlockName` means the slug is safe
//!   to use as a directory name

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    BlockConfig, BlockLayout, BlockName, BlockRequest, DEFAULT_BLOCK_DIRECTORY,
    DEFAULT_VENDOR_PREFIX, FileOutcome, FileReport, GeneratedFile, GenerationReport, PlannedFile,
    RelativePath, RenderContext, TemplateOverrides, VendorPrefix,
};
pub use error::DomainError;
pub use validation::DomainValidator;
pub use value_objects::TemplateKey;
