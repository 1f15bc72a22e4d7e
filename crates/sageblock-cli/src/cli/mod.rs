//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sageblock",
    bin_name = "sageblock",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold editor blocks for Sage themes",
    long_about = "sageblock writes the seven files of a native editor block \
                  (block.json, index.js, editor.jsx, save.jsx, editor.css, \
                  style.css, view.js) from stub templates into your theme.",
    after_help = "EXAMPLES:\n\
        \x20 sageblock make hero-banner\n\
        \x20 sageblock make pricing-table --vendor acme\n\
        \x20 sageblock -C web/app/themes/sage make cta --force\n\
        \x20 sageblock publish --stubs",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new block.
    #[command(
        visible_alias = "m",
        about = "Create a new block",
        after_help = "EXAMPLES:\n\
            \x20 sageblock make hero-banner                # vendor from config\n\
            \x20 sageblock make hero-banner --vendor acme  # acme/hero-banner\n\
            \x20 sageblock make hero-banner --force        # overwrite existing files\n\
            \x20 sageblock make hero-banner --dry-run      # show what would be written"
    )]
    Make(MakeArgs),

    /// Publish the default configuration (and optionally the stubs) into the theme.
    #[command(
        about = "Publish configuration and stubs",
        after_help = "EXAMPLES:\n\
            \x20 sageblock publish            # config/sageblock.toml\n\
            \x20 sageblock publish --stubs    # also stubs/blocks/*.stub\n\
            \x20 sageblock publish --force    # overwrite published files"
    )]
    Publish(PublishArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sageblock completions bash > ~/.local/share/bash-completion/completions/sageblock\n\
            \x20 sageblock completions zsh  > ~/.zfunc/_sageblock\n\
            \x20 sageblock completions fish > ~/.config/fish/completions/sageblock.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sageblock config list\n\
            \x20 sageblock config get default_vendor_prefix\n\
            \x20 sageblock config get templates.style_css\n\
            \x20 sageblock config path"
    )]
    Config(ConfigCommands),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `sageblock make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Block name in kebab-case, e.g. `hero-banner`. Prompted for when
    /// omitted on an interactive terminal.
    #[arg(value_name = "NAME", help = "Block name (kebab-case)")]
    pub name: Option<String>,

    /// Vendor prefix; defaults to `default_vendor_prefix` from config.
    #[arg(
        long = "vendor",
        value_name = "VENDOR",
        help = "Vendor prefix (namespace) for the block"
    )]
    pub vendor: Option<String>,

    /// Overwrite files that already exist.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Arguments for `sageblock publish`.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Overwrite previously published files.
    #[arg(short = 'f', long = "force", help = "Overwrite published files")]
    pub force: bool,

    /// Also copy the default stubs into `<theme>/stubs/blocks`.
    #[arg(long = "stubs", help = "Also publish the default stubs")]
    pub stubs: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sageblock completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sageblock config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `templates.block_json`.
        key: String,
    },
    /// Print the merged configuration.
    List,
    /// Print the configuration files that are consulted, in order.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn parse_make_command() {
        let cli = Cli::parse_from(["sageblock", "make", "hero-banner", "--vendor", "acme"]);
        match cli.command {
            Commands::Make(args) => {
                assert_eq!(args.name.as_deref(), Some("hero-banner"));
                assert_eq!(args.vendor.as_deref(), Some("acme"));
                assert!(!args.force);
                assert!(!args.dry_run);
            }
            other => panic!("expected Make, got {other:?}"),
        }
    }

    #[test]
    fn make_name_is_optional() {
        let cli = Cli::parse_from(["sageblock", "make", "--force"]);
        assert!(matches!(cli.command, Commands::Make(MakeArgs { name: None, force: true, .. })));
    }

    #[test]
    fn make_alias() {
        let cli = Cli::parse_from(["sageblock", "m", "cta"]);
        assert!(matches!(cli.command, Commands::Make(_)));
    }

    #[test]
    fn theme_root_is_global() {
        let cli = Cli::parse_from(["sageblock", "make", "cta", "-C", "themes/sage"]);
        assert_eq!(cli.global.theme_root, Path::new("themes/sage"));
    }

    #[test]
    fn publish_flags() {
        let cli = Cli::parse_from(["sageblock", "publish", "--stubs", "--force"]);
        assert!(matches!(
            cli.command,
            Commands::Publish(PublishArgs { stubs: true, force: true })
        ));
    }

    #[test]
    fn config_get_takes_a_key() {
        let cli = Cli::parse_from(["sageblock", "config", "get", "block_directory"]);
        assert!(matches!(cli.command, Commands::Config(ConfigCommands::Get { .. })));
    }

    #[test]
    fn no_color_flag_takes_no_value() {
        let cli = Cli::parse_from(["sageblock", "--no-color", "config", "list"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["sageblock", "--quiet", "--verbose", "config", "list"]);
        assert!(result.is_err());
    }
}
