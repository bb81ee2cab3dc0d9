//! Shared configuration constants for html_inline_css
//!
//! Default values used by the configuration builder and the serde option
//! surface, kept in one place so both agree.

/// Plugin identifier
///
/// Used as the `log` target for every diagnostic the plugin emits, so hosts can
/// filter plugin output with `RUST_LOG=html-inline-css-plugin=debug`.
pub const PLUGIN_NAME: &str = "html-inline-css-plugin";

/// Default anchor that generated `<style>` elements are placed next to
pub const DEFAULT_REPLACE_TARGET: &str = "</head>";

/// File extension that marks a build output as a stylesheet
pub const CSS_EXTENSION: &str = ".css";
