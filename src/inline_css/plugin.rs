//! Two-stage inlining plugin
//!
//! The host drives one `InlineCssPlugin` per compilation through its stages in
//! order:
//!
//! 1. `process_assets` once, after all outputs are collected. Stylesheets are
//!    cached and (by default) removed from the output set.
//! 2. `alter_asset_tags` per HTML document, before `<link>` tags are generated.
//!    Resolvable links are queued as styles and dropped from the document's
//!    link list.
//! 3. `before_emit` per HTML document. Queued styles are spliced in and the
//!    replace target is optionally removed.
//!
//! Call `reset()` (or build a new plugin) before reusing it for another
//! compilation.

use std::collections::HashMap;

use super::assets::{Assets, Compilation, HtmlDocument};
use super::cache::StyleCache;
use super::resolver::css_file_name;
use super::splicer::StyleSplicer;
use super::types::{Diagnostic, InlineReport, Result};
use crate::config::InlineCssConfig;
use crate::utils::PLUGIN_NAME;

#[derive(Debug)]
pub struct InlineCssPlugin {
    config: InlineCssConfig,
    splicer: StyleSplicer,
    css_style_cache: StyleCache,
    /// Styles waiting to be injected, keyed by HTML output name
    pending_styles: HashMap<String, Vec<String>>,
    diagnostics: Vec<Diagnostic>,
}

impl InlineCssPlugin {
    #[must_use]
    pub fn new(config: InlineCssConfig) -> Self {
        let splicer = StyleSplicer::new(&config);
        Self {
            config,
            splicer,
            css_style_cache: StyleCache::new(),
            pending_styles: HashMap::new(),
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &InlineCssConfig {
        &self.config
    }

    #[must_use]
    pub fn style_cache(&self) -> &StyleCache {
        &self.css_style_cache
    }

    /// Links that passed the filter but had no cached style
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Drop all per-compilation state
    pub fn reset(&mut self) {
        self.css_style_cache.clear();
        self.pending_styles.clear();
        self.diagnostics.clear();
    }

    /// Stage 1: cache stylesheets from the collected outputs
    pub fn process_assets(&mut self, compilation: &mut Compilation) {
        self.prepare(&mut compilation.assets);
    }

    /// Cache every eligible stylesheet in `assets`, removing it unless
    /// `leave_css_file` is set
    pub fn prepare(&mut self, assets: &mut Assets) {
        let cached = self.css_style_cache.populate(assets, &self.config);
        log::debug!(
            target: PLUGIN_NAME,
            "Cached {cached} css styles ({} total)",
            self.css_style_cache.len()
        );
    }

    /// Cached style for a `<link href>` reference
    ///
    /// `None` when the file is filtered out, or when it passed the filter but
    /// was never cached. The latter is logged and recorded in `diagnostics()`.
    pub fn get_style_for(&mut self, css_link: &str, public_path: &str) -> Option<String> {
        let file_name = css_file_name(css_link, public_path);

        if !self.config.is_inline_eligible(&file_name) {
            return None;
        }

        match self.css_style_cache.get(&file_name) {
            Some(style) => Some(style.to_string()),
            None => {
                log::error!(
                    target: PLUGIN_NAME,
                    "Can not get css style for {css_link} (resolved to {file_name})"
                );
                self.diagnostics.push(Diagnostic {
                    css_link: css_link.to_string(),
                    file_name: file_name.into_owned(),
                });
                None
            }
        }
    }

    /// Splice one style into `html`; see `StyleSplicer::inject`
    ///
    /// # Errors
    ///
    /// Returns `InlineCssError::MissingTarget` if the replace target is absent.
    pub fn inject(&self, html: &str, html_file_name: &str, style: &str) -> Result<String> {
        self.splicer.inject(html, html_file_name, style)
    }

    /// Remove the replace target if configured; see `StyleSplicer::strip`
    #[must_use]
    pub fn strip(&self, html: &str) -> String {
        self.splicer.strip(html)
    }

    /// Stage 2: queue styles for a document and drop their `<link>` references
    ///
    /// Safe to call again for the same document; the queue for that document is
    /// rebuilt rather than appended to. Returns the number of styles queued by
    /// this call.
    pub fn alter_asset_tags(&mut self, document: &mut HtmlDocument, public_path: &str) -> usize {
        let mut styles = Vec::new();
        let mut remaining = Vec::with_capacity(document.css_links.len());

        for css_link in std::mem::take(&mut document.css_links) {
            match self.get_style_for(&css_link, public_path) {
                Some(style) => styles.push(style),
                None => remaining.push(css_link),
            }
        }
        document.css_links = remaining;

        let queued = styles.len();
        if queued > 0 || !self.pending_styles.contains_key(&document.output_name) {
            self.pending_styles
                .insert(document.output_name.clone(), styles);
        }

        log::debug!(
            target: PLUGIN_NAME,
            "Queued {queued} css styles for {}",
            document.output_name
        );
        queued
    }

    /// Stage 3: inject queued styles, then strip the replace target once
    ///
    /// The document is only written back, and its queue only consumed, when
    /// every injection succeeded. A failed document can be fixed and emitted
    /// again without losing its styles.
    ///
    /// # Errors
    ///
    /// Returns `InlineCssError::MissingTarget` if the document lacks the
    /// replace target while it has styles queued.
    pub fn before_emit(&mut self, document: &mut HtmlDocument) -> Result<InlineReport> {
        let mut html = document.html.clone();
        let mut inlined = 0;
        if let Some(styles) = self.pending_styles.get(&document.output_name) {
            for style in styles {
                html = self.splicer.inject(&html, &document.output_name, style)?;
            }
            inlined = styles.len();
        }
        let stripped = self.strip(&html);

        let report = InlineReport {
            output_name: document.output_name.clone(),
            inlined,
            target_removed: stripped.len() != html.len(),
        };
        self.pending_styles.remove(&document.output_name);
        document.html = stripped;

        if report.has_inlined() {
            log::info!(
                target: PLUGIN_NAME,
                "Inlined {} css styles into {}",
                report.inlined,
                report.output_name
            );
        }

        Ok(report)
    }

    /// Run stages 2 and 3 back to back for one document
    ///
    /// # Errors
    ///
    /// Returns `InlineCssError::MissingTarget` if the replace target is absent.
    pub fn process_document(
        &mut self,
        document: &mut HtmlDocument,
        public_path: &str,
    ) -> Result<InlineReport> {
        self.alter_asset_tags(document, public_path);
        self.before_emit(document)
    }
}

impl Default for InlineCssPlugin {
    fn default() -> Self {
        Self::new(InlineCssConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline_css::assets::RawSource;

    fn compilation() -> Compilation {
        let mut compilation = Compilation::new("/public/");
        compilation.emit_asset("main.css", RawSource::new("body{color:red}"));
        compilation.emit_asset("print.css", RawSource::new("@media print{}"));
        compilation
    }

    #[test]
    fn test_get_style_for_strips_path_and_query() {
        let mut plugin = InlineCssPlugin::default();
        let mut compilation = compilation();
        plugin.process_assets(&mut compilation);

        assert_eq!(
            plugin.get_style_for("/public/main.css?abc123", "/public/"),
            Some("body{color:red}".to_string())
        );
        assert!(plugin.diagnostics().is_empty());
    }

    #[test]
    fn test_get_style_for_filtered_file_is_silent() {
        let config = InlineCssConfig::builder()
            .filter(|name| name != "print.css")
            .build()
            .unwrap();
        let mut plugin = InlineCssPlugin::new(config);
        let mut compilation = compilation();
        plugin.process_assets(&mut compilation);

        assert_eq!(plugin.get_style_for("/public/print.css", "/public/"), None);
        assert!(plugin.diagnostics().is_empty());
        assert!(compilation.has_asset("print.css"));
    }

    #[test]
    fn test_get_style_for_uncached_file_is_reported() {
        let mut plugin = InlineCssPlugin::default();

        assert_eq!(plugin.get_style_for("/public/gone.css?1", "/public/"), None);
        assert_eq!(
            plugin.diagnostics(),
            &[Diagnostic {
                css_link: "/public/gone.css?1".to_string(),
                file_name: "gone.css".to_string(),
            }]
        );
    }

    #[test]
    fn test_alter_asset_tags_reentry_does_not_duplicate() {
        let mut plugin = InlineCssPlugin::default();
        let mut compilation = compilation();
        plugin.process_assets(&mut compilation);

        let mut doc = HtmlDocument::new("index.html", "<head></head>")
            .with_css_links(["/public/main.css"]);
        assert_eq!(plugin.alter_asset_tags(&mut doc, "/public/"), 1);
        // watch mode: second pass sees the links already removed
        assert_eq!(plugin.alter_asset_tags(&mut doc, "/public/"), 0);

        let report = plugin.before_emit(&mut doc).unwrap();
        assert_eq!(report.inlined, 1);
        assert_eq!(doc.html, "<head><style>body{color:red}</style></head>");
    }

    #[test]
    fn test_before_emit_failure_keeps_queue_for_retry() {
        let mut plugin = InlineCssPlugin::default();
        let mut compilation = compilation();
        plugin.process_assets(&mut compilation);

        let mut doc = HtmlDocument::new("index.html", "<div></div>")
            .with_css_links(["/public/main.css"]);
        assert!(plugin.process_document(&mut doc, "/public/").is_err());
        assert_eq!(doc.html, "<div></div>");

        doc.html = "<head></head>".to_string();
        let report = plugin.before_emit(&mut doc).unwrap();

        assert_eq!(report.inlined, 1);
        assert_eq!(doc.html, "<head><style>body{color:red}</style></head>");

        // queue is consumed once emitted
        doc.html = "<head></head>".to_string();
        assert_eq!(plugin.before_emit(&mut doc).unwrap().inlined, 0);
    }

    #[test]
    fn test_target_removed_reflects_actual_strip() {
        let config = InlineCssConfig::builder()
            .target("<!--css-->")
            .remove_target(true)
            .build()
            .unwrap();
        let mut plugin = InlineCssPlugin::new(config);

        let mut with_target = HtmlDocument::new("a.html", "<head><!--css--></head>");
        assert!(plugin.before_emit(&mut with_target).unwrap().target_removed);

        let mut without_target = HtmlDocument::new("b.html", "<head></head>");
        let report = plugin.before_emit(&mut without_target).unwrap();
        assert!(!report.target_removed);
        assert_eq!(without_target.html, "<head></head>");
    }

    #[test]
    fn test_reset_clears_state() {
        let mut plugin = InlineCssPlugin::default();
        let mut compilation = compilation();
        plugin.process_assets(&mut compilation);
        plugin.get_style_for("/public/missing.css", "/public/");

        plugin.reset();

        assert!(plugin.style_cache().is_empty());
        assert!(plugin.diagnostics().is_empty());
    }
}
