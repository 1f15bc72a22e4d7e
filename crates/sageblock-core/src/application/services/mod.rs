//! Application services - orchestrate use cases.
//!
//! `TemplateResolver` picks the template file for each key;
//! `BlockGenerator` runs the whole "make a block" use case.

pub mod block_generator;
pub mod template_resolver;

pub use block_generator::{BlockGenerator, PlannedWrite};
pub use template_resolver::{ResolvedTemplate, TemplateOrigin, TemplateResolver};
