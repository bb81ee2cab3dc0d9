//! Serializable plugin options
//!
//! `InlineCssOptions` is the loosely typed surface hosts hand over as JSON.
//! Converting it into `InlineCssConfig` validates the parts serde cannot:
//! the shape of `attributes` and the filter glob.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::inline_css::types::{InlineCssError, Result};

use super::types::{Attributes, InlineCssConfig, ReplaceConfig};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InlineCssOptions {
    /// Glob over output names, `*` matches any sequence
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default, rename = "leaveCSSFile", alias = "leaveCssFile")]
    pub leave_css_file: bool,
    /// Replaces the default policy as a whole when present
    #[serde(default)]
    pub replace: Option<ReplaceConfig>,
    #[serde(default)]
    pub attributes: Option<Value>,
}

impl InlineCssOptions {
    /// Parse options from a JSON document
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe plugin options.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<InlineCssOptions> for InlineCssConfig {
    type Error = InlineCssError;

    fn try_from(options: InlineCssOptions) -> Result<Self> {
        let attributes = match options.attributes {
            Some(ref value) => Attributes::from_value(value)?,
            None => None,
        };

        let mut builder = InlineCssConfig::builder()
            .leave_css_file(options.leave_css_file)
            .replace(options.replace.unwrap_or_default());

        if let Some(pattern) = options.filter {
            builder = builder.filter_pattern(pattern);
        }
        if let Some(attributes) = attributes {
            builder = builder.attributes(attributes);
        }

        builder.build()
    }
}

impl InlineCssConfig {
    /// Build a config straight from JSON options
    ///
    /// # Errors
    ///
    /// Returns an error if the options are malformed or fail validation.
    pub fn from_json(json: &str) -> Result<Self> {
        InlineCssOptions::from_json(json)?.try_into()
    }
}
