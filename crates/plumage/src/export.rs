//! Exporters for the completed registry.

pub(crate) mod puml;
