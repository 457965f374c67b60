//! Custom tera filters.

use std::collections::HashMap;

use tera::{Result as TeraResult, Value};

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Replacement for URLs whose scheme is not allowed.
pub const BLOCKED_URL: &str = "#";

/// Neutralise a URL for use in `href`/`src`.
///
/// Scheme-less values (relative paths, fragments) pass through. Absolute URLs
/// keep their value only for [`ALLOWED_SCHEMES`]. Whitespace and control
/// characters are ignored while detecting the scheme, matching how browsers
/// read `java\tscript:`. The result still goes through HTML autoescape.
pub fn sanitize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let compact: String = trimmed
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    let Some(colon) = compact.find(':') else {
        return trimmed.to_string();
    };
    let head = &compact[..colon];
    if head.contains(['/', '?', '#']) {
        return trimmed.to_string();
    }

    let scheme = head.to_ascii_lowercase();
    if ALLOWED_SCHEMES.contains(&scheme.as_str()) {
        trimmed.to_string()
    } else {
        BLOCKED_URL.to_string()
    }
}

/// `{{ value | safe_url }}`
pub fn safe_url(value: &Value, _args: &HashMap<String, Value>) -> TeraResult<Value> {
    let raw = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("safe_url filter expects a string"))?;
    Ok(Value::String(sanitize_url(raw)))
}
