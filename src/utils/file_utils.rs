//! Build output file name helpers

use super::constants::CSS_EXTENSION;

/// Whether a build output name refers to a stylesheet.
///
/// Classification is purely by suffix; the content is never inspected.
///
/// # Examples
/// ```
/// # use html_inline_css::utils::file_utils::is_css;
/// assert!(is_css("static/css/main.3f2a.css"));
/// assert!(!is_css("main.css.map"));
/// assert!(!is_css("index.html"));
/// ```
#[inline]
#[must_use]
pub fn is_css(file_name: &str) -> bool {
    file_name.ends_with(CSS_EXTENSION)
}
