//! Plumage - PlantUML class diagrams from Java source trees.
//!
//! Heuristic structural extraction and diagram rendering. Source units are
//! scanned with forgiving patterns rather than parsed, merged into a
//! qualified-name registry, and rendered as a package-grouped PlantUML
//! class diagram with inheritance, realization, and association edges.

pub mod config;

mod error;
mod export;

pub use plumage_core::{identifier, model, registry, typename};

pub use error::PlumageError;

use log::{debug, info, trace};

use plumage_core::registry::Registry;

use config::AppConfig;

/// Builder for scanning source units and rendering Plumage diagrams.
///
/// This provides an API for processing source trees through the extraction,
/// registry-build, and rendering stages.
///
/// # Examples
///
/// ```rust
/// use plumage::{DiagramBuilder, config::AppConfig};
///
/// let units = ["package app;\npublic class Base {\n}\n"];
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Scan units into a registry
/// let registry = builder.scan(units);
/// assert_eq!(registry.len(), 1);
///
/// // Render the registry to PlantUML
/// let puml = builder.render(&registry);
/// assert!(puml.starts_with("@startuml"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including scan and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Scan source units into a completed registry.
    ///
    /// Each unit is extracted independently; the results are merged into
    /// one registry keyed by qualified name with first-write-wins collision
    /// handling. The registry is fully built before it is returned, so
    /// resolution never observes a partial symbol table.
    ///
    /// Extraction is best-effort: units that match nothing contribute
    /// nothing, and this method never fails.
    ///
    /// # Arguments
    ///
    /// * `units` - Source unit texts, in a stable order
    pub fn scan<I, S>(&self, units: I) -> Registry
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        info!("Extracting source units");

        let mut unit_count = 0usize;
        let mut entities = Vec::new();
        for unit in units {
            unit_count += 1;
            entities.extend(plumage_extract::extract_unit(unit.as_ref()));
        }

        let registry = Registry::build(entities);

        debug!(
            unit_count = unit_count,
            entity_count = registry.len();
            "Registry built"
        );
        trace!(registry:?; "Completed registry");

        registry
    }

    /// Render a completed registry to a PlantUML document string.
    ///
    /// Rendering is deterministic: the same registry always produces
    /// byte-identical output.
    ///
    /// # Arguments
    ///
    /// * `registry` - The completed registry to render
    pub fn render(&self, registry: &Registry) -> String {
        info!(entity_count = registry.len(); "Rendering PlantUML document");
        let document = export::puml::render(registry, self.config.render());
        debug!("Document rendered");
        document
    }
}
