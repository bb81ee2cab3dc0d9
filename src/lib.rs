pub mod config;
pub mod inline_css;
pub mod utils;

pub use config::{Attributes, Filter, InlineCssConfig, InlineCssOptions, Position, ReplaceConfig};
pub use inline_css::{
    Asset, Assets, Compilation, Diagnostic, HtmlDocument, InlineCssError, InlineCssPlugin,
    InlineReport, RawSource, Result, StyleCache,
};
pub use utils::PLUGIN_NAME;

/// Run a full compilation pass over `compilation` and its HTML documents
///
/// Convenience for hosts that have every document at hand at once: drops any
/// state left from a previous pass, caches the stylesheets, then processes
/// each document in order. Stops at the first document that fails.
///
/// # Errors
///
/// Returns `InlineCssError::MissingTarget` for the first document lacking the
/// replace target.
pub fn inline_compilation(
    plugin: &mut InlineCssPlugin,
    compilation: &mut Compilation,
    documents: &mut [HtmlDocument],
) -> Result<Vec<InlineReport>> {
    plugin.reset();
    plugin.process_assets(compilation);
    let public_path = compilation.public_path.clone();

    documents
        .iter_mut()
        .map(|document| plugin.process_document(document, &public_path))
        .collect()
}
