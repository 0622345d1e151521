//! The qualified-name registry built from all extracted units.
//!
//! The registry is constructed once, after every unit has been processed,
//! and is read-only from then on. Resolution and export both require the
//! completed registry because any unit may define a name referenced by any
//! other.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::debug;

use crate::{identifier::Id, model::TypeEntity};

/// All registered entities, keyed by qualified name.
///
/// Entities are stored in insertion order so that edge emission is
/// deterministic for a given unit order. A derived index maps each simple
/// name to the qualified names sharing it; the index is used only for
/// disambiguation during resolution, never for identity.
///
/// # Collision policy
///
/// Two units declaring the same qualified name are a collision, not an
/// error: the first registration wins and later duplicates are dropped
/// (logged at debug level).
#[derive(Debug, Default)]
pub struct Registry {
    entities: IndexMap<Id, TypeEntity>,
    by_simple_name: HashMap<String, Vec<Id>>,
}

impl Registry {
    /// Build a registry from all extracted entities, in unit order.
    pub fn build(entities: impl IntoIterator<Item = TypeEntity>) -> Self {
        let mut registry = Registry::default();

        for entity in entities {
            let qualified = entity.qualified_name();
            if registry.entities.contains_key(&qualified) {
                debug!(
                    qualified_name = qualified.to_string();
                    "Duplicate type declaration dropped"
                );
                continue;
            }

            registry
                .by_simple_name
                .entry(entity.name().to_string())
                .or_default()
                .push(qualified);
            registry.entities.insert(qualified, entity);
        }

        registry
    }

    /// Look up an entity by its qualified identity.
    pub fn get(&self, id: Id) -> Option<&TypeEntity> {
        self.entities.get(&id)
    }

    /// Whether a qualified name string is registered.
    pub fn contains_name(&self, qualified: &str) -> bool {
        self.entities.contains_key(&Id::new(qualified))
    }

    /// All qualified identities sharing a simple name, in registration order.
    pub fn candidates(&self, simple: &str) -> &[Id] {
        self.by_simple_name
            .get(simple)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterate entities in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (Id, &TypeEntity)> {
        self.entities.iter().map(|(id, entity)| (*id, entity))
    }

    /// The number of registered entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the registry holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
