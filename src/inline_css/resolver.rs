//! Mapping `<link href>` references back to output file names

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// `?` followed by at least one character, through end of input
static QUERY_STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\?.+$").expect("query string pattern is valid"));

/// Derive the output file name a stylesheet link points at
///
/// Links look like `public_path + file_name + "?" + hash`. The public path is
/// stripped once and only when it is a literal prefix; everything from the
/// first `?` is dropped as a cache-busting query.
///
/// # Examples
/// ```
/// # use html_inline_css::inline_css::resolver::css_file_name;
/// assert_eq!(css_file_name("/static/css/main.css?3f2a", "/static/"), "css/main.css");
/// assert_eq!(css_file_name("other/main.css", "/static/"), "other/main.css");
/// ```
#[must_use]
pub fn css_file_name<'a>(css_link: &'a str, public_path: &str) -> Cow<'a, str> {
    let without_base = css_link.strip_prefix(public_path).unwrap_or(css_link);
    QUERY_STRING.replace(without_base, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_public_path_and_hash() {
        assert_eq!(css_file_name("/assets/style.css?abc123", "/assets/"), "style.css");
        assert_eq!(
            css_file_name("https://cdn.example.com/app.css?v=1&x=2", "https://cdn.example.com/"),
            "app.css"
        );
    }

    #[test]
    fn test_public_path_only_stripped_at_start() {
        assert_eq!(css_file_name("x/assets/style.css", "assets/"), "x/assets/style.css");
        assert_eq!(css_file_name("assets/assets/a.css", "assets/"), "assets/a.css");
    }

    #[test]
    fn test_public_path_is_literal() {
        // A regex-looking public path must not act as a pattern
        assert_eq!(css_file_name("a.b/style.css", "a.b/"), "style.css");
        assert_eq!(css_file_name("axb/style.css", "a.b/"), "axb/style.css");
    }

    #[test]
    fn test_bare_question_mark_is_kept() {
        assert_eq!(css_file_name("style.css?", ""), "style.css?");
    }

    #[test]
    fn test_empty_public_path() {
        assert_eq!(css_file_name("style.css?v=2", ""), "style.css");
        assert_eq!(css_file_name("style.css", ""), "style.css");
    }
}
