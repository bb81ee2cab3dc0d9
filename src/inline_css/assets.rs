//! Build outputs as seen by the plugin
//!
//! The host pipeline owns the output set. The plugin only reads stylesheet
//! sources out of it and deletes entries it has inlined.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// A single build output
pub trait Asset {
    /// Full textual content of the output
    fn source(&self) -> Cow<'_, str>;

    /// Size of the output in bytes
    fn size(&self) -> usize;
}

/// Output set keyed by output file name
pub type Assets = BTreeMap<String, Box<dyn Asset>>;

/// In-memory asset backed by a string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSource {
    content: String,
}

impl RawSource {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Asset for RawSource {
    fn source(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.content)
    }

    fn size(&self) -> usize {
        self.content.len()
    }
}

impl From<String> for RawSource {
    fn from(content: String) -> Self {
        Self { content }
    }
}

impl From<&str> for RawSource {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

/// One compilation pass: its output set and the public path assets are served from
pub struct Compilation {
    pub assets: Assets,
    pub public_path: String,
}

impl Compilation {
    #[must_use]
    pub fn new(public_path: impl Into<String>) -> Self {
        Self {
            assets: Assets::new(),
            public_path: public_path.into(),
        }
    }

    /// Add or replace an output
    pub fn emit_asset(&mut self, file_name: impl Into<String>, asset: impl Asset + 'static) {
        self.assets.insert(file_name.into(), Box::new(asset));
    }

    #[must_use]
    pub fn has_asset(&self, file_name: &str) -> bool {
        self.assets.contains_key(file_name)
    }
}

impl std::fmt::Debug for Compilation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compilation")
            .field("assets", &self.assets.keys().collect::<Vec<_>>())
            .field("public_path", &self.public_path)
            .finish()
    }
}

/// An HTML output together with the stylesheet links the host would emit for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    pub output_name: String,
    pub html: String,
    /// Link references (as they appear in `href`) still to be rendered as `<link>` tags
    pub css_links: Vec<String>,
}

impl HtmlDocument {
    #[must_use]
    pub fn new(output_name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            output_name: output_name.into(),
            html: html.into(),
            css_links: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_css_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.css_links.extend(links.into_iter().map(Into::into));
        self
    }
}
