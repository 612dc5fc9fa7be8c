//! Update-time validation for setting values
//!
//! Link checks come in two tiers:
//! - [`is_loosely_valid_link`]: what the link dialog checks while typing. Any
//!   absolute URL passes.
//! - [`validate_external_program_link`]: what the service enforces before
//!   persisting. Only absolute http(s) URLs with a dotted host pass.

use super::catalog::{ExternalPrograms, SecurityLimits, SettingKey};
use crate::contract::SettingsError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::ops::RangeInclusive;
use url::Url;

#[allow(clippy::expect_used)]
static HTTP_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+\..+").expect("http link regex should compile"));

/// Validate a value for a catalog key
///
/// Only `security_limits` and `external_programs` carry rules; other keys
/// accept any payload and fall back to their default on read if it does not
/// decode.
pub fn validate_setting(key: SettingKey, value: &Value) -> Result<(), SettingsError> {
    match key {
        SettingKey::SecurityLimits => {
            validate_security_limits(&decode::<SecurityLimits>(key, value)?)
        }
        SettingKey::ExternalPrograms => {
            validate_external_programs(&decode::<ExternalPrograms>(key, value)?)
        }
        _ => Ok(()),
    }
}

fn decode<T: serde::de::DeserializeOwned>(key: SettingKey, value: &Value) -> Result<T, SettingsError> {
    serde_json::from_value(value.clone()).map_err(|e| {
        SettingsError::validation(key.as_str(), format!("Invalid {} payload: {}", key, e))
    })
}

/// Bounds checked on every `security_limits` write
pub fn validate_security_limits(limits: &SecurityLimits) -> Result<(), SettingsError> {
    check_range("max_children_per_parent", limits.max_children_per_parent, 1..=20)?;
    check_range("max_work_items_per_child", limits.max_work_items_per_child, 10..=500)?;
    check_range("password_min_length", limits.password_min_length, 6..=50)?;
    check_range("max_login_attempts", limits.max_login_attempts, 3..=10)?;
    Ok(())
}

fn check_range(field: &str, value: i64, range: RangeInclusive<i64>) -> Result<(), SettingsError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(SettingsError::validation(
        field,
        format!(
            "{} must be between {} and {} (got {})",
            field,
            range.start(),
            range.end(),
            value
        ),
    ))
}

/// Strict rules for `external_programs`; a disabled entry is never link-checked
pub fn validate_external_programs(programs: &ExternalPrograms) -> Result<(), SettingsError> {
    if !programs.enabled {
        return Ok(());
    }
    validate_external_program_link(&programs.link)
}

/// Strict link check: non-empty, `^https?://.+\..+`, and an absolute URL
pub fn validate_external_program_link(link: &str) -> Result<(), SettingsError> {
    let link = link.trim();
    if link.is_empty() {
        return Err(SettingsError::validation(
            "link",
            "External program link is required when external programs are enabled",
        ));
    }

    if !HTTP_LINK.is_match(link) || Url::parse(link).is_err() {
        return Err(SettingsError::validation(
            "link",
            format!(
                "External program link '{}' must be a valid http:// or https:// URL",
                link
            ),
        ));
    }

    Ok(())
}

/// Loose link check used while editing: empty is valid, anything else must
/// parse as an absolute URL of any scheme
pub fn is_loosely_valid_link(link: &str) -> bool {
    let link = link.trim();
    link.is_empty() || Url::parse(link).is_ok()
}
