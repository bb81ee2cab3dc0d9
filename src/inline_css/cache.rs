//! Per-compilation cache of stylesheet sources

use std::collections::HashMap;

use super::assets::Assets;
use crate::config::InlineCssConfig;
use crate::utils::{PLUGIN_NAME, is_css};

/// Stylesheet content keyed by output file name
///
/// Entries are only ever added or overwritten; inlined outputs removed from the
/// output set stay cached for the rest of the compilation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleCache {
    styles: HashMap<String, String>,
}

impl StyleCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache every eligible stylesheet in `assets`
    ///
    /// A file is cached when it is a `.css` output and the config filter accepts
    /// it. Unless `leave_css_file` is set, cached files are deleted from the
    /// output set. Returns the number of stylesheets cached.
    pub fn populate(&mut self, assets: &mut Assets, config: &InlineCssConfig) -> usize {
        let eligible: Vec<String> = assets
            .keys()
            .filter(|file_name| is_css(file_name) && config.is_inline_eligible(file_name))
            .cloned()
            .collect();

        for file_name in &eligible {
            let Some(asset) = assets.get(file_name) else {
                continue;
            };
            let source = asset.source().into_owned();
            log::debug!(
                target: PLUGIN_NAME,
                "Caching css style {file_name} ({} bytes)",
                asset.size()
            );
            self.styles.insert(file_name.clone(), source);

            if !config.leave_css_file() {
                assets.remove(file_name);
            }
        }

        eligible.len()
    }

    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&str> {
        self.styles.get(file_name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, file_name: &str) -> bool {
        self.styles.contains_key(file_name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn clear(&mut self) {
        self.styles.clear();
    }
}
