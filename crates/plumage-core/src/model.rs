//! The extracted structural model.
//!
//! This module contains the in-memory representation of type declarations
//! recovered from source units by pattern matching. These records are built
//! once per unit by the extraction stage and never mutated afterwards; the
//! registry and the exporter only read them.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ normalize (comment stripping)
//! Normalized Text
//!     ↓ pattern scans
//! Model (these types) - declared types with members and raw references
//!     ↓ registry build
//! Registry - qualified-name map + simple-name index
//!     ↓ resolution + export
//! PlantUML document
//! ```
//!
//! # Organization
//!
//! - [`entity`] - Type declarations: [`TypeEntity`], [`TypeKind`]
//! - [`member`] - Declared members: [`Field`], [`Method`], [`Constructor`], [`Visibility`]

pub mod entity;
pub mod member;

pub use entity::*;
pub use member::*;
