//! PlantUML class-diagram rendering.
//!
//! Renders the completed registry into one self-contained `.puml`
//! document: package-grouped entity blocks with member listings, then
//! inheritance and realization edges, then field-derived association
//! edges. Every cross-reference goes through the resolver; references
//! that resolve to nothing simply produce no edge.
//!
//! Output is deterministic for a given registry: packages and the
//! entities inside them are sorted by name, and edges follow registration
//! order.

use std::collections::BTreeMap;

use log::debug;

use plumage_core::{
    model::{Parameter, TypeEntity},
    registry::Registry,
    typename,
};

use crate::config::RenderConfig;

/// Display name of the root-namespace package group.
const DEFAULT_PACKAGE: &str = "(default)";

/// Render the registry as a complete PlantUML document.
pub(crate) fn render(registry: &Registry, config: &RenderConfig) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("@startuml".to_string());
    lines.push("skinparam classAttributeIconSize 0".to_string());
    if config.hide_empty_members() {
        lines.push("hide empty members".to_string());
    }

    // Group by package, sorting entities by qualified name within each group.
    let mut packages: BTreeMap<String, Vec<(String, &TypeEntity)>> = BTreeMap::new();
    for (id, entity) in registry.iter() {
        let group = if entity.namespace().is_empty() {
            DEFAULT_PACKAGE.to_string()
        } else {
            entity.namespace().to_string()
        };
        packages
            .entry(group)
            .or_default()
            .push((id.to_string(), entity));
    }
    for entries in packages.values_mut() {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
    }

    for (package, entries) in &packages {
        if package == DEFAULT_PACKAGE {
            lines.push(format!("package \"{DEFAULT_PACKAGE}\" {{"));
        } else {
            lines.push(format!("package {package} {{"));
        }

        for (qualified, entity) in entries {
            lines.push(format!(
                "{} \"{}\" as {} {{",
                entity.kind().puml_keyword(),
                entity.name(),
                block_id(qualified)
            ));

            for field in entity.fields() {
                lines.push(format!(
                    "  {} {} : {}",
                    field.visibility(),
                    field.name(),
                    display_type(field.type_ref())
                ));
            }

            for constructor in entity.constructors() {
                lines.push(format!(
                    "  {} {}({})",
                    constructor.visibility(),
                    constructor.name(),
                    parameter_list(constructor.parameters())
                ));
            }

            for method in entity.methods() {
                lines.push(format!(
                    "  {} {}({}) : {}",
                    method.visibility(),
                    method.name(),
                    parameter_list(method.parameters()),
                    typename::simple_name(method.return_type())
                ));
            }

            lines.push("}".to_string());
        }

        lines.push("}".to_string());
    }

    // Inheritance and realization edges, in registration order.
    for (id, entity) in registry.iter() {
        let child = block_id(&id.to_string());

        if let Some(parent) = entity.extends() {
            if let Some(parent_id) = registry.resolve(parent, entity.namespace()) {
                lines.push(format!("{} <|-- {}", block_id(&parent_id.to_string()), child));
            }
        }

        for interface in entity.implements() {
            if let Some(interface_id) = registry.resolve(interface, entity.namespace()) {
                lines.push(format!(
                    "{} <|.. {}",
                    block_id(&interface_id.to_string()),
                    child
                ));
            }
        }
    }

    // Association edges from field types, one per qualifying field.
    for (id, entity) in registry.iter() {
        let source = block_id(&id.to_string());
        for field in entity.fields() {
            let base = typename::strip_array_suffix(field.type_ref().trim());
            let base = typename::strip_generics(base);

            if config.is_excluded(typename::simple_name(&base)) {
                continue;
            }

            let Some(target) = registry.resolve(&base, entity.namespace()) else {
                continue;
            };
            if target == id {
                continue;
            }
            lines.push(format!("{} --> {}", source, block_id(&target.to_string())));
        }
    }

    lines.push("@enduml".to_string());

    debug!(line_count = lines.len(); "PlantUML document rendered");
    lines.join("\n")
}

/// Stable PlantUML identifier for a qualified name, safe for dots.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, prefixed with `T_`.
fn block_id(qualified: &str) -> String {
    let mut id = String::with_capacity(qualified.len() + 2);
    id.push_str("T_");
    for ch in qualified.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            id.push(ch);
        } else {
            id.push('_');
        }
    }
    id
}

/// Display form of a field type: simple name, all array markers collapsed
/// into at most one trailing `[]`.
fn display_type(type_ref: &str) -> String {
    let without_arrays = type_ref.replace("[]", "");
    let mut display = typename::simple_name(&without_arrays).to_string();
    if type_ref.trim().ends_with("[]") {
        display.push_str("[]");
    }
    display
}

/// Render parameters as `name : SimpleType` pairs.
fn parameter_list(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|parameter| {
            format!(
                "{} : {}",
                parameter.name(),
                typename::simple_name(parameter.type_ref())
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use plumage_core::model::{Field, Parameter, TypeEntity, TypeKind, Visibility};
    use proptest::prelude::*;

    use super::*;

    fn entity(namespace: &str, name: &str) -> TypeEntity {
        TypeEntity::new(
            TypeKind::Class,
            name.to_string(),
            namespace.to_string(),
            None,
            vec![],
        )
    }

    #[test]
    fn test_block_id_sanitizes() {
        assert_eq!(block_id("app.Base"), "T_app_Base");
        assert_eq!(block_id("Base"), "T_Base");
        assert_eq!(block_id("a-b.C$D"), "T_a_b_C_D");
    }

    #[test]
    fn test_display_type() {
        assert_eq!(display_type("int"), "int");
        assert_eq!(display_type("int[]"), "int[]");
        assert_eq!(display_type("int[][]"), "int[]");
        assert_eq!(display_type("app.io.Buffer[]"), "Buffer[]");
        assert_eq!(display_type("app.Order"), "Order");
    }

    #[test]
    fn test_parameter_list() {
        let parameters = vec![
            Parameter::new("app.Order".to_string(), "order".to_string()),
            Parameter::new("int".to_string(), "count".to_string()),
        ];
        assert_eq!(parameter_list(&parameters), "order : Order, count : int");
    }

    #[test]
    fn test_header_and_footer() {
        let registry = Registry::build(vec![]);
        let out = render(&registry, &RenderConfig::default());

        assert!(out.starts_with("@startuml\n"));
        assert!(out.ends_with("\n@enduml"));
        assert!(out.contains("skinparam classAttributeIconSize 0"));
        assert!(out.contains("hide empty members"));
    }

    #[test]
    fn test_hide_empty_members_is_config_gated() {
        let registry = Registry::build(vec![]);
        let config = RenderConfig::new(false, vec![]);
        assert!(!render(&registry, &config).contains("hide empty members"));
    }

    #[test]
    fn test_default_package_is_quoted() {
        let registry = Registry::build(vec![entity("", "Main")]);
        let out = render(&registry, &RenderConfig::default());
        assert!(out.contains("package \"(default)\" {"));
        assert!(out.contains("class \"Main\" as T_Main {"));
    }

    #[test]
    fn test_entities_sorted_within_package() {
        let registry = Registry::build(vec![entity("app", "Zeta"), entity("app", "Alpha")]);
        let out = render(&registry, &RenderConfig::default());

        let alpha = out.find("class \"Alpha\"").expect("Alpha block");
        let zeta = out.find("class \"Zeta\"").expect("Zeta block");
        assert!(alpha < zeta);
    }

    #[test]
    fn test_field_association_excludes_builtins_and_self() {
        let mut order = entity("shop", "Order");
        order.push_field(Field::new(
            Visibility::Private,
            "int".to_string(),
            "count".to_string(),
        ));
        order.push_field(Field::new(
            Visibility::Private,
            "Order".to_string(),
            "next".to_string(),
        ));
        order.push_field(Field::new(
            Visibility::Private,
            "Customer".to_string(),
            "customer".to_string(),
        ));
        let registry = Registry::build(vec![order, entity("shop", "Customer")]);

        let out = render(&registry, &RenderConfig::default());
        assert!(out.contains("T_shop_Order --> T_shop_Customer"));
        // the int field and the self-typed field produce no edges
        assert_eq!(out.matches("-->").count(), 1);
    }

    #[test]
    fn test_one_association_edge_per_field_occurrence() {
        let mut order = entity("shop", "Order");
        for name in ["billing", "shipping"] {
            order.push_field(Field::new(
                Visibility::Private,
                "Address".to_string(),
                name.to_string(),
            ));
        }
        let registry = Registry::build(vec![order, entity("shop", "Address")]);

        let out = render(&registry, &RenderConfig::default());
        assert_eq!(out.matches("T_shop_Order --> T_shop_Address").count(), 2);
    }

    #[test]
    fn test_unresolvable_references_emit_nothing() {
        let mut child = TypeEntity::new(
            TypeKind::Class,
            "Child".to_string(),
            "app".to_string(),
            Some("Missing".to_string()),
            vec!["AlsoMissing".to_string()],
        );
        child.push_field(Field::new(
            Visibility::Private,
            "Unknown".to_string(),
            "mystery".to_string(),
        ));
        let registry = Registry::build(vec![child]);

        let out = render(&registry, &RenderConfig::default());
        assert!(!out.contains("<|--"));
        assert!(!out.contains("<|.."));
        assert!(!out.contains("-->"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut base = entity("app", "Base");
        base.push_field(Field::new(
            Visibility::Private,
            "int".to_string(),
            "n".to_string(),
        ));
        let registry = Registry::build(vec![base, entity("app", "Child"), entity("", "Main")]);

        let config = RenderConfig::default();
        assert_eq!(render(&registry, &config), render(&registry, &config));
    }

    proptest! {
        #[test]
        fn block_id_uses_safe_alphabet(input in ".{0,64}") {
            let id = block_id(&input);
            prop_assert!(id.starts_with("T_"));
            prop_assert!(id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
        }
    }
}
