//! Type declaration records for the structural model.

use std::fmt;

use crate::{
    identifier::Id,
    model::member::{Constructor, Field, Method},
};

/// The kind of a declared type, from its declaration keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A `class` declaration.
    Class,
    /// An `interface` declaration, carrying only a contract.
    Interface,
    /// An `enum` declaration.
    Enum,
}

impl TypeKind {
    /// Map a declaration keyword to its kind, or `None` for anything else.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(TypeKind::Class),
            "interface" => Some(TypeKind::Interface),
            "enum" => Some(TypeKind::Enum),
            _ => None,
        }
    }

    /// The PlantUML block keyword for this kind.
    pub fn puml_keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.puml_keyword())
    }
}

/// One extracted type declaration with its members.
///
/// A `TypeEntity` is created by the extraction stage from a single unit's
/// text and is not modified once the unit has been processed. The `extends`
/// and `implements` references are kept as raw text, qualified or simple,
/// and are only mapped to concrete entities during export, once the full
/// registry exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntity {
    kind: TypeKind,
    name: String,
    namespace: String,
    extends: Option<String>,
    implements: Vec<String>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    constructors: Vec<Constructor>,
}

impl TypeEntity {
    /// Create a new entity with no members.
    ///
    /// # Arguments
    ///
    /// * `kind` - The declaration kind.
    /// * `name` - The simple name.
    /// * `namespace` - The dotted namespace path, empty for the root namespace.
    /// * `extends` - The raw parent reference, if declared.
    /// * `implements` - The raw interface references, in declaration order.
    pub fn new(
        kind: TypeKind,
        name: String,
        namespace: String,
        extends: Option<String>,
        implements: Vec<String>,
    ) -> Self {
        Self {
            kind,
            name,
            namespace,
            extends,
            implements,
            fields: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Get the entity's kind.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Get the entity's simple name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the entity's namespace; empty for the root namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the raw parent reference, if any.
    pub fn extends(&self) -> Option<&str> {
        self.extends.as_deref()
    }

    /// Get the raw interface references in declaration order.
    pub fn implements(&self) -> &[String] {
        &self.implements
    }

    /// Get the declared fields in scan order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Get the declared methods in scan order.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Get the declared constructors in scan order.
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    /// The qualified identity of this entity: namespace + "." + simple name,
    /// with the namespace omitted when empty. This is the registry key.
    ///
    /// # Examples
    ///
    /// ```
    /// use plumage_core::model::{TypeEntity, TypeKind};
    ///
    /// let entity = TypeEntity::new(
    ///     TypeKind::Class,
    ///     "Order".to_string(),
    ///     "shop".to_string(),
    ///     None,
    ///     vec![],
    /// );
    /// assert_eq!(entity.qualified_name(), "shop.Order");
    /// ```
    pub fn qualified_name(&self) -> Id {
        Id::qualify(&self.namespace, &self.name)
    }

    /// Append a field. Used by the extraction stage while the unit that
    /// declared this entity is being processed.
    pub fn push_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Append a method.
    pub fn push_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    /// Append a constructor.
    pub fn push_constructor(&mut self, constructor: Constructor) {
        self.constructors.push(constructor);
    }
}

impl fmt::Display for TypeEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

#[cfg(test)]
mod tests {
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
    fn test_kind_from_keyword() {
        assert_eq!(TypeKind::from_keyword("class"), Some(TypeKind::Class));
        assert_eq!(
            TypeKind::from_keyword("interface"),
            Some(TypeKind::Interface)
        );
        assert_eq!(TypeKind::from_keyword("enum"), Some(TypeKind::Enum));
        assert_eq!(TypeKind::from_keyword("record"), None);
        assert_eq!(TypeKind::from_keyword(""), None);
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(entity("shop", "Order").qualified_name(), "shop.Order");
        assert_eq!(
            entity("shop.billing", "Invoice").qualified_name(),
            "shop.billing.Invoice"
        );
    }

    #[test]
    fn test_qualified_name_root_namespace() {
        assert_eq!(entity("", "Main").qualified_name(), "Main");
    }

    #[test]
    fn test_members_keep_order() {
        use crate::model::member::{Field, Visibility};

        let mut e = entity("shop", "Order");
        e.push_field(Field::new(
            Visibility::Private,
            "int".to_string(),
            "count".to_string(),
        ));
        e.push_field(Field::new(
            Visibility::Public,
            "String".to_string(),
            "label".to_string(),
        ));

        let names: Vec<&str> = e.fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["count", "label"]);
    }
}
