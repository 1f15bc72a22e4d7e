//! Application layer for sageblock.
//!
//! This layer contains:
//! - **Services**: `TemplateResolver` and the `BlockGenerator` use case
//! - **Ports**: traits for the filesystem and the renderer
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All naming and path rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{BlockGenerator, PlannedWrite, ResolvedTemplate, TemplateOrigin, TemplateResolver};

pub use ports::{Filesystem, TemplateRenderer};

pub use error::ApplicationError;
