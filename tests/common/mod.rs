//! Test utilities and helper functions for the html_inline_css test suite

use html_inline_css::{Compilation, HtmlDocument, RawSource};

/// Route plugin logs through env_logger; safe to call from every test
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a test HTML document with the given head and body content
#[allow(dead_code)]
pub fn create_test_html(head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    {head}
</head>
<body>
    {body}
</body>
</html>"#
    )
}

/// A compilation resembling a typical bundler output directory
#[allow(dead_code)]
pub fn create_test_compilation(public_path: &str) -> Compilation {
    let mut compilation = Compilation::new(public_path);
    compilation.emit_asset("css/main.css", RawSource::new("body{margin:0}"));
    compilation.emit_asset("css/vendor.css", RawSource::new(".btn{color:blue}"));
    compilation.emit_asset("css/print.css", RawSource::new("@media print{nav{display:none}}"));
    compilation.emit_asset("js/main.js", RawSource::new("console.log(1)"));
    compilation.emit_asset("index.html", RawSource::new(""));
    compilation
}

/// An HTML document referencing stylesheets the way a host would list them
#[allow(dead_code)]
pub fn create_test_document(name: &str, links: &[&str]) -> HtmlDocument {
    HtmlDocument::new(name, create_test_html("<title>Test</title>", "<h1>Hi</h1>"))
        .with_css_links(links.iter().copied())
}
