//! Core configuration types for stylesheet inlining
//!
//! This module contains the immutable `InlineCssConfig` and the value types it
//! is assembled from: the file filter, the replace policy and the attribute
//! list rendered onto generated `<style>` elements.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::inline_css::types::{InlineCssError, Result};
use crate::utils::DEFAULT_REPLACE_TARGET;

/// Decides whether a stylesheet output should be inlined
///
/// Defaults to accepting every file name.
#[derive(Clone)]
pub struct Filter(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Filter {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Filter accepting every file name
    #[must_use]
    pub fn accept_all() -> Self {
        Self::new(|_| true)
    }

    /// Filter matching file names against a glob where `*` matches any sequence
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting regex pattern is invalid.
    pub fn from_glob(pattern: &str) -> Result<Self> {
        let regex = compile_glob_pattern(pattern)?;
        Ok(Self::new(move |file_name| regex.is_match(file_name)))
    }

    #[inline]
    #[must_use]
    pub fn accepts(&self, file_name: &str) -> bool {
        (self.0)(file_name)
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::accept_all()
    }
}

impl std::fmt::Debug for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Filter(..)")
    }
}

/// Compile a glob pattern into an anchored regex
///
/// Everything except `*` is matched literally, so `.` in file names does not
/// act as a wildcard.
fn compile_glob_pattern(pattern: &str) -> Result<regex::Regex> {
    let regex_pattern = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    let anchored = format!("^{regex_pattern}$");

    regex::Regex::new(&anchored).map_err(|source| InlineCssError::InvalidFilter {
        pattern: pattern.to_string(),
        source,
    })
}

/// Where the `<style>` element goes relative to the replace target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Before,
    After,
}

/// Anchor policy for generated `<style>` elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceConfig {
    /// Substring the style is inserted next to; first occurrence wins
    pub target: String,
    #[serde(default)]
    pub position: Position,
    /// Remove `target` once all styles for a document are injected
    #[serde(default)]
    pub remove_target: bool,
}

impl ReplaceConfig {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            position: Position::default(),
            remove_target: false,
        }
    }
}

impl Default for ReplaceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REPLACE_TARGET)
    }
}

/// Ordered attributes rendered onto every generated `<style>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, keeping the position of an existing key
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Attributes from loosely typed option data
    ///
    /// `null` means not configured. Anything other than an object of scalar
    /// values is rejected. Falsy values (`null`, `false`, `0`, `""`) render as
    /// an empty string.
    ///
    /// # Errors
    ///
    /// Returns `InlineCssError::InvalidAttributes` naming the offending value.
    pub fn from_value(value: &Value) -> Result<Option<Self>> {
        let map = match value {
            Value::Null => return Ok(None),
            Value::Object(map) => map,
            other => {
                return Err(InlineCssError::InvalidAttributes {
                    value: other.to_string(),
                });
            }
        };

        let mut attributes = Self::new();
        for (name, value) in map {
            let rendered = match value {
                Value::Null | Value::Bool(false) => String::new(),
                Value::Bool(true) => "true".to_string(),
                Value::String(s) => s.clone(),
                Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
                Value::Number(n) => render_number(n),
                Value::Array(_) | Value::Object(_) => {
                    return Err(InlineCssError::InvalidAttributes {
                        value: value.to_string(),
                    });
                }
            };
            attributes.insert(name.clone(), rendered);
        }

        Ok(Some(attributes))
    }

    /// Render as ` key="value" key2="value2"`, or an empty string when empty
    #[must_use]
    pub fn render(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }

        let pairs = self
            .0
            .iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ");

        format!(" {pairs}")
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

/// Render a JSON number the way a JS string coercion would
///
/// Integral floats lose their fraction (`1.0` renders as `1`).
fn render_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Main configuration for the inlining plugin
///
/// Immutable once built; see `InlineCssConfig::builder()`.
#[derive(Debug, Clone, Default)]
pub struct InlineCssConfig {
    pub(crate) filter: Filter,
    /// Keep inlined stylesheets in the output set
    pub(crate) leave_css_file: bool,
    pub(crate) replace: ReplaceConfig,
    /// `None` means the option was never set; renders no attributes
    pub(crate) attributes: Option<Attributes>,
}
