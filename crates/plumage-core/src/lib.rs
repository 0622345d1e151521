//! Plumage Core Types and Definitions
//!
//! This crate provides the foundational types for the Plumage diagram
//! generator. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Model**: The extracted structural model ([`model`] module)
//! - **Registry**: The qualified-name registry built from all units ([`registry`] module)
//! - **Resolution**: Type-reference resolution over the registry ([`resolve`] module)
//! - **Type names**: Helpers for simplifying textual type references ([`typename`] module)

pub mod identifier;
pub mod model;
pub mod registry;
pub mod resolve;
pub mod typename;
