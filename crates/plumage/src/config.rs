//! Configuration types for Plumage.
//!
//! This module provides configuration structures that control how source
//! trees are scanned and how the resulting diagram is rendered. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining scan and render settings.
//! - [`ScanConfig`] - Controls which files count as source units.
//! - [`RenderConfig`] - Controls PlantUML output options and association exclusions.
//!
//! # Example
//!
//! ```
//! # use plumage::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.scan().extension(), "java");
//! assert!(config.render().hide_empty_members());
//! ```

use serde::Deserialize;

use plumage_core::typename;

/// Top-level application configuration combining scan and render settings.
///
/// Groups [`ScanConfig`] and [`RenderConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Scan configuration section.
    #[serde(default)]
    scan: ScanConfig,

    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified scan and render configurations.
    ///
    /// # Arguments
    ///
    /// * `scan` - Source discovery settings.
    /// * `render` - PlantUML output options.
    pub fn new(scan: ScanConfig, render: RenderConfig) -> Self {
        Self { scan, render }
    }

    /// Returns the scan configuration.
    pub fn scan(&self) -> &ScanConfig {
        &self.scan
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Source discovery configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    /// File extension (without the dot) identifying source units.
    #[serde(default = "default_extension")]
    extension: String,
}

impl ScanConfig {
    /// Creates a new [`ScanConfig`] with the specified extension.
    pub fn new(extension: String) -> Self {
        Self { extension }
    }

    /// Returns the configured source extension, without the dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether a file extension identifies a source unit. The comparison
    /// ignores ASCII case, so `Foo.JAVA` is scanned like `Foo.java`.
    pub fn matches_extension(&self, extension: &str) -> bool {
        extension.eq_ignore_ascii_case(&self.extension)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    "java".to_string()
}

/// PlantUML output configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Whether to emit the `hide empty members` directive.
    #[serde(default = "default_true")]
    hide_empty_members: bool,

    /// Additional type names excluded from association edges, on top of
    /// the built-in primitive and wrapper set.
    #[serde(default)]
    extra_builtins: Vec<String>,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    pub fn new(hide_empty_members: bool, extra_builtins: Vec<String>) -> Self {
        Self {
            hide_empty_members,
            extra_builtins,
        }
    }

    /// Whether the `hide empty members` directive is emitted.
    pub fn hide_empty_members(&self) -> bool {
        self.hide_empty_members
    }

    /// Additional association-excluded type names from configuration.
    pub fn extra_builtins(&self) -> &[String] {
        &self.extra_builtins
    }

    /// Whether a simple type name is excluded from association edges,
    /// either as a language built-in or through configuration.
    pub fn is_excluded(&self, simple: &str) -> bool {
        typename::is_builtin(simple) || self.extra_builtins.iter().any(|name| name == simple)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            hide_empty_members: true,
            extra_builtins: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.scan().extension(), "java");
        assert!(config.render().hide_empty_members());
        assert!(config.render().extra_builtins().is_empty());
    }

    #[test]
    fn test_extension_matching_ignores_case() {
        let scan = ScanConfig::default();
        assert!(scan.matches_extension("java"));
        assert!(scan.matches_extension("JAVA"));
        assert!(scan.matches_extension("Java"));
        assert!(!scan.matches_extension("kt"));
    }

    #[test]
    fn test_is_excluded_combines_builtins_and_extras() {
        let render = RenderConfig::new(true, vec!["UUID".to_string()]);
        assert!(render.is_excluded("int"));
        assert!(render.is_excluded("String"));
        assert!(render.is_excluded("UUID"));
        assert!(!render.is_excluded("Order"));
    }
}
