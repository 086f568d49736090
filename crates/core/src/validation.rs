//! Form input validation shared by all catalog and account forms.
//!
//! HTML forms submit every field as text. These helpers turn raw field
//! values into typed values, keeping "field left empty" (`None`) apart from
//! an explicit zero.

use crate::error::CoreError;
use crate::types::DbId;

/// Reject a required text field that is empty or whitespace only.
pub fn require_text(label: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{label} is required")));
    }
    Ok(())
}

/// Parse an optional floating point field. Empty input is `None`.
pub fn parse_optional_f64(label: &str, raw: &str) -> Result<Option<f64>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| CoreError::Validation(format!("{label} must be a number")))?;
    if !value.is_finite() {
        return Err(CoreError::Validation(format!("{label} must be a finite number")));
    }
    Ok(Some(value))
}

/// Parse a required floating point field that defaults to zero when empty.
pub fn parse_f64_or_zero(label: &str, raw: &str) -> Result<f64, CoreError> {
    Ok(parse_optional_f64(label, raw)?.unwrap_or(0.0))
}

/// Parse an optional integer field (e.g. a discovery year). Empty input is `None`.
pub fn parse_optional_i32(label: &str, raw: &str) -> Result<Option<i32>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| CoreError::Validation(format!("{label} must be a whole number")))
}

/// Parse an optional reference to another row. Empty input is `None`.
pub fn parse_optional_id(label: &str, raw: &str) -> Result<Option<DbId>, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(Some(id)),
        _ => Err(CoreError::Validation(format!("{label} is not a valid selection"))),
    }
}

/// Interpret an HTML checkbox. Browsers omit unchecked boxes entirely.
pub fn parse_checkbox(raw: Option<&str>) -> bool {
    matches!(raw, Some("on") | Some("true"))
}

/// Minimal structural check for e-mail addresses.
pub fn validate_email(value: &str) -> Result<(), CoreError> {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(CoreError::Validation("Email address is not valid".into())),
    }
}
