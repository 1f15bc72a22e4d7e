//! Subcommand handlers. Each translates parsed arguments into calls on the
//! core and reports the result through the [`OutputManager`].
//!
//! [`OutputManager`]: crate::output::OutputManager

pub mod completions;
pub mod config;
pub mod make;
pub mod publish;
