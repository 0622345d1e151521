//! Heuristic structural extraction for Plumage.
//!
//! This crate turns the raw text of one compilation unit into model
//! entities through a sequence of independent, order-preserving pattern
//! scans over comment-stripped text. The public entry point is
//! [`extract_unit`].
//!
//! Extraction is pure and best-effort by design: no well-formedness check
//! is performed, one scan's failure never blocks another, and inputs that
//! match nothing yield an empty result rather than an error. A unit that
//! produces no entities is indistinguishable from a legitimately empty
//! unit.

pub mod normalize;

mod members;
mod patterns;

use log::{debug, trace};

use plumage_core::model::{TypeEntity, TypeKind};

/// Extract all type entities declared in one unit's text.
///
/// Processing steps:
///
/// 1. Strip comments ([`normalize::strip_comments`]).
/// 2. Detect the first namespace declaration; absent means root namespace.
/// 3. Collect every type declaration in scan order.
/// 4. If any entity was found, scan the whole unit for field, method, and
///    constructor shapes and attach them all to the *first* entity (the
///    unit's member target). A member-shaped match whose identifier equals
///    the target's simple name counts as a constructor, not a method.
///
/// Running this twice on identical text yields identical results.
///
/// # Examples
///
/// ```
/// use plumage_extract::extract_unit;
///
/// let entities = extract_unit("package app;\npublic class Base {\n}\n");
/// assert_eq!(entities.len(), 1);
/// assert_eq!(entities[0].qualified_name(), "app.Base");
/// ```
pub fn extract_unit(unit_text: &str) -> Vec<TypeEntity> {
    let text = normalize::strip_comments(unit_text);

    let namespace = patterns::PACKAGE
        .captures(&text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let mut entities: Vec<TypeEntity> = Vec::new();
    for caps in patterns::TYPE_DECL.captures_iter(&text) {
        let Some(kind) = TypeKind::from_keyword(&caps["kind"]) else {
            continue;
        };
        let name = caps["name"].to_string();
        let extends = caps
            .name("extends")
            .map(|m| m.as_str().trim().to_string());
        let implements: Vec<String> = caps
            .name("implements")
            .map(|m| {
                m.as_str()
                    .split(',')
                    .map(str::trim)
                    .filter(|reference| !reference.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        entities.push(TypeEntity::new(
            kind,
            name,
            namespace.clone(),
            extends,
            implements,
        ));
    }

    if let Some(target) = entities.first_mut() {
        members::attach_members(&text, target);
    }

    debug!(entity_count = entities.len(); "Unit extracted");
    trace!(namespace = namespace; "Unit namespace");

    entities
}

#[cfg(test)]
mod extract_tests;
