//! Getter methods for `InlineCssConfig`

use super::types::{Attributes, InlineCssConfig, Position, ReplaceConfig};

impl InlineCssConfig {
    #[must_use]
    pub fn leave_css_file(&self) -> bool {
        self.leave_css_file
    }

    #[must_use]
    pub fn replace(&self) -> &ReplaceConfig {
        &self.replace
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.replace.target
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.replace.position
    }

    #[must_use]
    pub fn remove_target(&self) -> bool {
        self.replace.remove_target
    }

    #[must_use]
    pub fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    /// Whether `file_name` passes the configured filter
    ///
    /// The same check guards both caching and lookup.
    #[inline]
    #[must_use]
    pub fn is_inline_eligible(&self, file_name: &str) -> bool {
        self.filter.accepts(file_name)
    }
}
