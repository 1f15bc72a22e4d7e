use heck::ToKebabCase;

use crate::domain::{
    entities::{BlockName, VendorPrefix},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_block_name(name: &str) -> Result<BlockName, DomainError> {
        check_slug(name).map_err(|reason| DomainError::InvalidName {
            name: name.into(),
            reason,
        })?;
        Ok(BlockName(name.to_owned()))
    }

    pub fn validate_vendor(vendor: &str) -> Result<VendorPrefix, DomainError> {
        check_slug(vendor).map_err(|reason| DomainError::InvalidVendor {
            vendor: vendor.into(),
            reason,
        })?;
        Ok(VendorPrefix(vendor.to_owned()))
    }
}

/// Slug rules shared by block names and vendor prefixes.
///
/// A slug becomes both a directory name and half of the `vendor/name`
/// identifier registered with the editor, so it must be a lowercase
/// kebab-case word: `[a-z][a-z0-9]*(-[a-z0-9]+)*`.
fn check_slug(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("cannot be empty".into());
    }
    if value == "." || value == ".." || value.contains("..") {
        return Err("cannot contain '..'".into());
    }
    if value.contains('/') || value.contains('\\') {
        return Err("cannot contain path separators".into());
    }
    if let Some(bad) = value
        .chars()
        .find(|c| c.is_control() || matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'))
    {
        return Err(format!("contains a character not allowed in file names: {bad:?}"));
    }
    if value.chars().any(|c| c.is_ascii_uppercase()) || value.contains(['_', ' ']) {
        let suggestion = value.to_kebab_case();
        return Err(format!("must be lowercase kebab-case (did you mean '{suggestion}'?)"));
    }
    if !value.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err("must start with a lowercase letter".into());
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(format!("contains unsupported character {bad:?}"));
    }
    if value.ends_with('-') || value.contains("--") {
        return Err("hyphens must separate words".into());
    }
    Ok(())
}
