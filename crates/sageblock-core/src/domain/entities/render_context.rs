//! Placeholder substitution for block stubs.
//!
//! Stubs contain `{{TOKEN}}` placeholders. A [`RenderContext`] maps token
//! names to values and substitutes them in one left-to-right pass; there are
//! no conditionals, loops or filters.

use std::collections::BTreeMap;

use chrono::Datelike;
use heck::{ToKebabCase, ToLowerCamelCase, ToSnakeCase, ToTitleCase, ToUpperCamelCase};

use crate::domain::entities::block::BlockLayout;

/// Context for stub rendering.
///
/// A **Value Object** containing every token a stub may reference.
/// Immutable after creation.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `BLOCK_NAME` | "hero-banner" |
/// | `BLOCK_NAME_KEBAB` | "hero-banner" |
/// | `BLOCK_NAME_SNAKE` | "hero_banner" |
/// | `BLOCK_NAME_CAMEL` | "heroBanner" |
/// | `BLOCK_NAME_PASCAL` | "HeroBanner" |
/// | `BLOCK_TITLE` | "Hero Banner" |
/// | `VENDOR` | "acme" |
/// | `BLOCK_NAMESPACE` | "acme/hero-banner" |
/// | `BLOCK_CSS_CLASS` | "wp-block-acme-hero-banner" |
/// | `TEXT_DOMAIN` | "acme" |
/// | `YEAR` | "2026" |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: BTreeMap<String, String>,
}

impl RenderContext {
    /// Create a render context for a derived block layout.
    pub fn for_block(layout: &BlockLayout) -> Self {
        let name = layout.name.as_str();
        let vendor = layout.vendor.as_str();
        let mut vars = BTreeMap::new();

        vars.insert("BLOCK_NAME".to_string(), name.to_string());
        vars.insert("BLOCK_NAME_KEBAB".to_string(), name.to_kebab_case());
        vars.insert("BLOCK_NAME_SNAKE".to_string(), name.to_snake_case());
        vars.insert("BLOCK_NAME_CAMEL".to_string(), name.to_lower_camel_case());
        vars.insert("BLOCK_NAME_PASCAL".to_string(), name.to_upper_camel_case());
        vars.insert("BLOCK_TITLE".to_string(), name.to_title_case());
        vars.insert("VENDOR".to_string(), vendor.to_string());
        vars.insert("BLOCK_NAMESPACE".to_string(), layout.namespace());
        vars.insert(
            "BLOCK_CSS_CLASS".to_string(),
            format!("wp-block-{vendor}-{name}"),
        );
        vars.insert("TEXT_DOMAIN".to_string(), vendor.to_string());
        vars.insert("YEAR".to_string(), chrono::Local::now().year().to_string());

        Self { variables: vars }
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace `{{VARIABLE}}` placeholders in a single pass.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` stays as the literal `{{UNKNOWN}}`
    /// - `{{ BLOCK_NAME }}` (inner whitespace) is accepted
    /// - substituted values are never rescanned, so a value containing
    ///   `{{...}}` is emitted verbatim
    /// - an unterminated `{{` is copied through unchanged
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let Some(end) = after_open.find("}}") else {
                out.push_str(&rest[start..]);
                return out;
            };

            let token = after_open[..end].trim();
            match self.variables.get(token) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + 2 + end + 2]),
            }
            rest = &after_open[end + 2..];
        }

        out.push_str(rest);
        out
    }
}
