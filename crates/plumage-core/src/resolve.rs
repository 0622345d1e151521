//! Type-reference resolution over the completed registry.
//!
//! A reference is raw text, qualified or simple, plus the namespace of
//! the entity asking. Resolution maps it to exactly one registered entity
//! or to nothing; "unknown" and "ambiguous" are deliberately collapsed into
//! the same `None` outcome, distinguishable only through debug logging.
//! When several entities share a simple name and none sits in the asking
//! namespace, the resolver refuses to guess.

use log::debug;

use crate::{identifier::Id, registry::Registry, typename};

impl Registry {
    /// Resolve a textual type reference against the registry.
    ///
    /// Resolution tiers, in order:
    ///
    /// 1. A qualified reference (containing `.`) that matches a registered
    ///    qualified name resolves to it; on a miss, its trailing segment is
    ///    retried as a simple name through the tiers below.
    /// 2. A simple name joined onto `context_namespace` that matches a
    ///    registered qualified name resolves to it (same-namespace
    ///    preference).
    /// 3. A simple name carried by exactly one registered entity anywhere
    ///    resolves to that entity (global uniqueness).
    /// 4. Everything else resolves to nothing; unknown names and
    ///    ambiguous names are treated alike.
    ///
    /// # Arguments
    ///
    /// * `reference` - The raw reference text; empty resolves to nothing.
    /// * `context_namespace` - The namespace of the referencing entity,
    ///   empty for the root namespace.
    pub fn resolve(&self, reference: &str, context_namespace: &str) -> Option<Id> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        if reference.contains('.') {
            let exact = Id::new(reference);
            if self.get(exact).is_some() {
                return Some(exact);
            }
            return self.resolve_simple(typename::simple_name(reference), context_namespace);
        }

        self.resolve_simple(reference, context_namespace)
    }

    fn resolve_simple(&self, simple: &str, context_namespace: &str) -> Option<Id> {
        let same_namespace = Id::qualify(context_namespace, simple);
        if self.get(same_namespace).is_some() {
            return Some(same_namespace);
        }

        match self.candidates(simple) {
            [unique] => Some(*unique),
            [] => {
                debug!(reference = simple; "Reference does not match any registered type");
                None
            }
            candidates => {
                debug!(
                    reference = simple,
                    candidate_count = candidates.len();
                    "Reference is ambiguous, no edge emitted"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TypeEntity, TypeKind};

    fn entity(namespace: &str, name: &str) -> TypeEntity {
        TypeEntity::new(
            TypeKind::Class,
            name.to_string(),
            namespace.to_string(),
            None,
            vec![],
        )
    }

    fn registry() -> Registry {
        Registry::build(vec![
            entity("a", "Foo"),
            entity("b", "Foo"),
            entity("a", "Only"),
            entity("", "Root"),
        ])
    }

    #[test]
    fn test_empty_reference_resolves_to_nothing() {
        let registry = registry();
        assert_eq!(registry.resolve("", "a"), None);
        assert_eq!(registry.resolve("   ", "a"), None);
    }

    #[test]
    fn test_qualified_exact_match() {
        let registry = registry();
        assert_eq!(registry.resolve("b.Foo", "a"), Some(Id::new("b.Foo")));
    }

    #[test]
    fn test_qualified_miss_falls_back_to_simple_segment() {
        let registry = registry();
        // "x.y.Only" is not registered; its trailing segment is globally unique.
        assert_eq!(registry.resolve("x.y.Only", ""), Some(Id::new("a.Only")));
        // The fallback also honors same-namespace preference.
        assert_eq!(registry.resolve("x.Foo", "a"), Some(Id::new("a.Foo")));
        // An ambiguous trailing segment still resolves to nothing.
        assert_eq!(registry.resolve("x.Foo", "c"), None);
    }

    #[test]
    fn test_same_namespace_preference() {
        let registry = registry();
        // "Foo" is ambiguous globally, but the asking namespace has one.
        assert_eq!(registry.resolve("Foo", "a"), Some(Id::new("a.Foo")));
        assert_eq!(registry.resolve("Foo", "b"), Some(Id::new("b.Foo")));
    }

    #[test]
    fn test_globally_unique_fallback() {
        let registry = registry();
        assert_eq!(registry.resolve("Only", "c"), Some(Id::new("a.Only")));
    }

    #[test]
    fn test_ambiguous_resolves_to_nothing() {
        let registry = registry();
        // No same-namespace candidate and two global candidates: refuse to guess.
        assert_eq!(registry.resolve("Foo", "c"), None);
        assert_eq!(registry.resolve("Foo", ""), None);
    }

    #[test]
    fn test_unknown_resolves_to_nothing() {
        let registry = registry();
        assert_eq!(registry.resolve("Missing", "a"), None);
        assert_eq!(registry.resolve("a.Missing.Deeply", "a"), None);
    }

    #[test]
    fn test_root_namespace_context() {
        let registry = registry();
        assert_eq!(registry.resolve("Root", ""), Some(Id::new("Root")));
        // Unique globally, so a foreign context still finds it.
        assert_eq!(registry.resolve("Root", "a"), Some(Id::new("Root")));
    }

    #[test]
    fn test_resolution_is_pure() {
        let registry = registry();
        for _ in 0..3 {
            assert_eq!(registry.resolve("Foo", "a"), Some(Id::new("a.Foo")));
            assert_eq!(registry.resolve("Foo", "c"), None);
        }
    }
}
