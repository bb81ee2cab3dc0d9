//! Property tests for caching and lookup eligibility

use html_inline_css::{Compilation, InlineCssConfig, InlineCssPlugin, RawSource};
use proptest::prelude::*;

fn file_name() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(/[a-z]{1,8})?\\.(css|js|html)"
}

fn skip_underscore(name: &str) -> bool {
    !name.rsplit('/').next().unwrap_or(name).starts_with('_')
}

proptest! {
    #[test]
    fn cache_matches_filter_and_css_suffix(
        files in prop::collection::btree_map(
            prop_oneof![file_name(), file_name().prop_map(|n| format!("_{n}"))],
            "[ -~]{0,32}",
            0..12,
        ),
        leave in any::<bool>(),
    ) {
        let config = InlineCssConfig::builder()
            .filter(skip_underscore)
            .leave_css_file(leave)
            .build()
            .unwrap();
        let mut plugin = InlineCssPlugin::new(config);
        let mut compilation = Compilation::new("/");
        for (name, content) in &files {
            compilation.emit_asset(name.clone(), RawSource::new(content.clone()));
        }

        plugin.process_assets(&mut compilation);

        for (name, content) in &files {
            let eligible = name.ends_with(".css") && skip_underscore(name);
            if eligible {
                prop_assert_eq!(plugin.style_cache().get(name), Some(content.as_str()));
                prop_assert_eq!(compilation.has_asset(name), leave);
            } else {
                prop_assert!(!plugin.style_cache().contains(name));
                prop_assert!(compilation.has_asset(name));
                prop_assert_eq!(compilation.assets[name].source(), content.as_str());
            }
        }
    }

    #[test]
    fn lookup_resolves_cached_files_behind_public_path(
        name in "[a-z]{1,8}\\.css",
        content in "[ -~]{0,32}",
        hash in "[0-9a-f]{1,12}",
        public_path in "(/|/static/|https://cdn\\.example\\.com/)",
    ) {
        let mut plugin = InlineCssPlugin::default();
        let mut compilation = Compilation::new(public_path.clone());
        compilation.emit_asset(name.clone(), RawSource::new(content.clone()));
        plugin.process_assets(&mut compilation);

        let link = format!("{public_path}{name}?{hash}");
        prop_assert_eq!(plugin.get_style_for(&link, &public_path), Some(content));
        prop_assert!(plugin.diagnostics().is_empty());
    }

    #[test]
    fn filtered_files_never_resolve(name in "_[a-z]{1,8}\\.css", content in "[ -~]{0,16}") {
        let config = InlineCssConfig::builder().filter(skip_underscore).build().unwrap();
        let mut plugin = InlineCssPlugin::new(config);
        let mut compilation = Compilation::new("/");
        compilation.emit_asset(name.clone(), RawSource::new(content));
        plugin.process_assets(&mut compilation);

        prop_assert_eq!(plugin.get_style_for(&format!("/{name}"), "/"), None);
        prop_assert!(plugin.diagnostics().is_empty());
    }
}
