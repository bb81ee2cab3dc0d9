//! Type definitions for stylesheet inlining

use thiserror::Error;

/// Result type alias for inlining operations
pub type Result<T> = std::result::Result<T, InlineCssError>;

/// Errors that abort the current inlining operation
#[derive(Debug, Error)]
pub enum InlineCssError {
    /// `attributes` was configured with something other than a key/value object
    #[error("attributes must be a key/value object, not {value}")]
    InvalidAttributes { value: String },

    /// The replace target does not occur in the HTML document
    #[error("cannot inject css style into \"{html_file_name}\": replace target \"{target}\" not found")]
    MissingTarget {
        html_file_name: String,
        target: String,
    },

    /// A glob filter could not be compiled
    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Plugin options could not be deserialized
    #[error("Invalid plugin options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// A stylesheet link that passed the filter but had nothing cached for it
///
/// Recorded instead of failing so the remaining links and documents keep going.
/// The `<link>` stays in the document untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub css_link: String,
    pub file_name: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "no cached css style for {} (resolved to {})",
            self.css_link, self.file_name
        )
    }
}

/// Outcome of emitting one HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineReport {
    pub output_name: String,
    /// Number of `<style>` elements spliced into the document
    pub inlined: usize,
    /// Whether the replace target was removed after injection
    pub target_removed: bool,
}

impl InlineReport {
    /// Check if anything was inlined into the document
    #[must_use]
    pub fn has_inlined(&self) -> bool {
        self.inlined > 0
    }
}
