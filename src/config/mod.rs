//! Configuration module for stylesheet inlining
//!
//! This module provides the `InlineCssConfig` struct, its fluent builder, and
//! the serde option surface hosts use to configure the plugin from JSON.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod options;
pub mod types;

// Re-exports for public API
pub use builder::InlineCssConfigBuilder;
pub use options::InlineCssOptions;
pub use types::{Attributes, Filter, InlineCssConfig, Position, ReplaceConfig};
