//! Build-tool property rendering
//!
//! Pure functions that turn a [`VersionRecord`] into the `key=value` properties
//! build pipelines read, including the "next" versions used to prepare the
//! following release.

use crate::version::VersionRecord;

/// Prefix used when the caller does not provide one
pub const DEFAULT_PREFIX: &str = "parsedVersion";

/// Error type for property rendering
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    #[error("Property prefix must not be empty")]
    EmptyPrefix,

    #[error("Property prefix {0:?} contains an invalid character {1:?}")]
    InvalidCharacter(String, char),
}

/// Validated key prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPrefix(String);

impl PropertyPrefix {
    /// Validate a property prefix
    ///
    /// Keys end up on the left of `key=value` lines, so the prefix may not be
    /// empty and may not contain whitespace or a separator (`=` or `:`).
    pub fn new(prefix: impl Into<String>) -> Result<Self, PropertyError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(PropertyError::EmptyPrefix);
        }
        if let Some(c) = prefix
            .chars()
            .find(|c| c.is_whitespace() || *c == '=' || *c == ':')
        {
            return Err(PropertyError::InvalidCharacter(prefix, c));
        }
        Ok(Self(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn key(&self, name: &str) -> String {
        format!("{}.{name}", self.0)
    }
}

impl Default for PropertyPrefix {
    fn default() -> Self {
        Self(DEFAULT_PREFIX.to_string())
    }
}

/// Convert a record into ordered property pairs
///
/// Absent qualifiers render as an empty value. "next" values saturate at the
/// field's maximum.
pub fn to_properties(version: &VersionRecord, prefix: &PropertyPrefix) -> Vec<(String, String)> {
    vec![
        (prefix.key("majorVersion"), version.major().to_string()),
        (prefix.key("minorVersion"), version.minor().to_string()),
        (prefix.key("incrementalVersion"), version.patch().to_string()),
        (prefix.key("buildNumber"), version.build_number().to_string()),
        (
            prefix.key("qualifier"),
            version.qualifier().unwrap_or_default().to_string(),
        ),
        (
            prefix.key("nextMajorVersion"),
            version.major().saturating_add(1).to_string(),
        ),
        (
            prefix.key("nextMinorVersion"),
            version.minor().saturating_add(1).to_string(),
        ),
        (
            prefix.key("nextIncrementalVersion"),
            version.patch().saturating_add(1).to_string(),
        ),
        (
            prefix.key("nextBuildNumber"),
            version.build_number().saturating_add(1).to_string(),
        ),
    ]
}

/// Render property pairs as newline-terminated `key=value` lines
///
/// Values are escaped so every pair stays on a single line and reads back
/// unchanged through a `.properties` loader.
pub fn render_properties(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}\n", escape_value(value)))
        .collect()
}

/// Escape a property value
///
/// Backslashes and line breaks are written as escape sequences. A leading
/// blank is escaped because loaders skip whitespace before the value.
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{c}' => escaped.push_str("\\f"),
            ' ' if i == 0 => escaped.push_str("\\ "),
            c => escaped.push(c),
        }
    }
    escaped
}
