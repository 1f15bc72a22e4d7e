//! Infrastructure adapters for sageblock.
//!
//! This crate implements the ports defined in `sageblock_core::application::ports`.
//! It contains all filesystem I/O.

pub mod filesystem;
pub mod renderer;
pub mod stubs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use stubs::default_stub_dir;
