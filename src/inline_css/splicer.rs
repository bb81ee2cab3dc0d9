//! Substring-based `<style>` injection
//!
//! No HTML parsing happens here: the replace target is located with a plain
//! substring search and only its first occurrence is ever touched.

use super::types::{InlineCssError, Result};
use crate::config::{InlineCssConfig, Position, ReplaceConfig};

/// Splices `<style>` elements into HTML at the configured replace target
#[derive(Debug, Clone)]
pub struct StyleSplicer {
    replace: ReplaceConfig,
    /// Pre-rendered ` key="value"` list, empty when no attributes are set
    attributes: String,
}

impl StyleSplicer {
    #[must_use]
    pub fn new(config: &InlineCssConfig) -> Self {
        Self {
            replace: config.replace().clone(),
            attributes: config
                .attributes()
                .map(|attributes| attributes.render())
                .unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn style_element(&self, style: &str) -> String {
        format!("<style{}>{style}</style>", self.attributes)
    }

    /// Insert `style` as a `<style>` element next to the first replace target
    ///
    /// # Errors
    ///
    /// Returns `InlineCssError::MissingTarget` if `html` does not contain the
    /// replace target. `html` is left untouched in that case.
    pub fn inject(&self, html: &str, html_file_name: &str, style: &str) -> Result<String> {
        let target = self.replace.target.as_str();

        let Some(index) = html.find(target) else {
            return Err(InlineCssError::MissingTarget {
                html_file_name: html_file_name.to_string(),
                target: target.to_string(),
            });
        };

        let element = self.style_element(style);
        let (head, tail) = html.split_at(index);
        let tail = &tail[target.len()..];

        let mut out = String::with_capacity(html.len() + element.len());
        out.push_str(head);
        match self.replace.position {
            Position::Before => {
                out.push_str(&element);
                out.push_str(target);
            }
            Position::After => {
                out.push_str(target);
                out.push_str(&element);
            }
        }
        out.push_str(tail);

        Ok(out)
    }

    /// Remove the first replace target if `remove_target` is configured
    #[must_use]
    pub fn strip(&self, html: &str) -> String {
        if self.replace.remove_target {
            html.replacen(&self.replace.target, "", 1)
        } else {
            html.to_string()
        }
    }
}
