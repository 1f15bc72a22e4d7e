//! `sageblock config`: inspect the merged configuration.

use serde_json::Value;

use sageblock_core::domain::TemplateKey;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&value)?;
            } else {
                output.print(&render_value(&value))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised =
                    toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                        message: format!("Failed to serialise config: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            for source in AppConfig::sources(global.config.as_deref(), &global.theme_root) {
                let state = match (source.path.is_file(), source.required) {
                    (true, _) => "found",
                    (false, true) => "missing, required",
                    (false, false) => "not found",
                };
                output.print(&format!(
                    "{:<9} {} ({state})",
                    source.label,
                    source.path.display()
                ))?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Look up a dotted key such as `templates.style_css`.
///
/// Optional keys that are unset yield `Null` rather than an error.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let root = serde_json::to_value(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(value) = key.split('.').try_fold(&root, |value, segment| value.get(segment)) {
        return Ok(value.clone());
    }
    if is_optional_key(key) {
        return Ok(Value::Null);
    }

    Err(CliError::config(format!("Unknown config key: '{key}'")))
}

fn is_optional_key(key: &str) -> bool {
    key == "stub_directory"
        || key
            .strip_prefix("templates.")
            .is_some_and(|name| TemplateKey::ALL.iter().any(|k| k.as_str() == name))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "(unset)".to_owned(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
