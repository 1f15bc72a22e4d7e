//! Flags accepted before or after any subcommand.

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log level: -v info, -vv debug, -vvv trace. Warnings only by default.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output without ANSI colors.
    ///
    /// Any non-empty `NO_COLOR` other than `0`, `false`, `no` or `off` also
    /// turns color off.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read this file instead of `<theme>/config/sageblock.toml`.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sage theme directory that block paths are relative to.
    #[arg(
        short = 'C',
        long,
        global = true,
        value_name = "DIR",
        env = "SAGEBLOCK_THEME_ROOT",
        default_value = "."
    )]
    pub theme_root: PathBuf,

    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colors when stdout is a terminal.
    #[default]
    Auto,
    Human,
    Plain,
    /// One JSON document on stdout.
    Json,
}
