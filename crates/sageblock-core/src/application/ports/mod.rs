//! Application ports (traits) for external dependencies.
//!
//! Adapters in `sageblock-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `Filesystem`: existence checks, template reads, atomic writes
//!   - `TemplateRenderer`: placeholder substitution

pub mod output;

pub use output::{Filesystem, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer};
