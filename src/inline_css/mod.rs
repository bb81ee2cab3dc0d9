//! Stylesheet inlining
//!
//! This module caches compiled stylesheet outputs and splices them into HTML
//! outputs as `<style>` elements, replacing the `<link>` references the host
//! would otherwise emit.

// Sub-modules
pub mod assets;
pub mod cache;
pub mod plugin;
pub mod resolver;
pub mod splicer;
pub mod types;

// Re-exports for public API
pub use assets::{Asset, Assets, Compilation, HtmlDocument, RawSource};
pub use cache::StyleCache;
pub use plugin::InlineCssPlugin;
pub use resolver::css_file_name;
pub use splicer::StyleSplicer;
pub use types::{Diagnostic, InlineCssError, InlineReport, Result};
