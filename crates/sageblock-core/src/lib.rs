//! sageblock core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the sageblock
//! block scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          sageblock-cli (CLI)            │
//! │       (config layering, output)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (BlockGenerator, TemplateResolver)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Filesystem, TemplateRenderer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sageblock-adapters (Infrastructure)  │
//! │ (LocalFilesystem, SimpleRenderer, etc)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sageblock_core::prelude::*;
//!
//! let generator = BlockGenerator::new(config, theme_root, stub_dir, filesystem, renderer);
//! let report = generator.generate(&BlockRequest::new("hero-banner").with_vendor("acme"))?;
//! println!("{}", report.summary());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BlockGenerator, ResolvedTemplate, TemplateOrigin, TemplateResolver,
        ports::{Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        BlockConfig, BlockLayout, BlockRequest, FileOutcome, GenerationReport, RenderContext,
        TemplateKey,
    };
    pub use crate::error::{BlockError, BlockResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
