//! Fluent builder for `InlineCssConfig`
//!
//! Every field is optional, so unlike a typestate builder there is no required
//! ordering; `build()` only fails when a glob filter does not compile.

use crate::inline_css::types::Result;

use super::types::{Attributes, Filter, InlineCssConfig, Position, ReplaceConfig};

#[derive(Debug, Default)]
pub struct InlineCssConfigBuilder {
    pub(crate) filter: Option<Filter>,
    pub(crate) filter_pattern: Option<String>,
    pub(crate) leave_css_file: bool,
    pub(crate) replace: ReplaceConfig,
    pub(crate) attributes: Option<Attributes>,
}

impl InlineCssConfig {
    /// Create a builder for configuring an `InlineCssConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> InlineCssConfigBuilder {
        InlineCssConfigBuilder::default()
    }
}

impl InlineCssConfigBuilder {
    /// Only inline stylesheets whose output name satisfies `predicate`
    #[must_use]
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Filter::new(predicate));
        self.filter_pattern = None;
        self
    }

    /// Only inline stylesheets whose output name matches a `*` glob
    ///
    /// The pattern is compiled in `build()`.
    #[must_use]
    pub fn filter_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.filter_pattern = Some(pattern.into());
        self.filter = None;
        self
    }

    #[must_use]
    pub fn leave_css_file(mut self, leave: bool) -> Self {
        self.leave_css_file = leave;
        self
    }

    #[must_use]
    pub fn replace(mut self, replace: ReplaceConfig) -> Self {
        self.replace = replace;
        self
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.replace.target = target.into();
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.replace.position = position;
        self
    }

    #[must_use]
    pub fn remove_target(mut self, remove: bool) -> Self {
        self.replace.remove_target = remove;
        self
    }

    #[must_use]
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Add a single attribute to the generated `<style>` element
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(Attributes::new)
            .insert(name, value);
        self
    }

    /// # Errors
    ///
    /// Returns an error if a glob filter pattern is invalid.
    pub fn build(self) -> Result<InlineCssConfig> {
        let filter = match (self.filter, self.filter_pattern) {
            (_, Some(pattern)) => Filter::from_glob(&pattern)?,
            (Some(filter), None) => filter,
            (None, None) => Filter::accept_all(),
        };

        Ok(InlineCssConfig {
            filter,
            leave_css_file: self.leave_css_file,
            replace: self.replace,
            attributes: self.attributes,
        })
    }
}
