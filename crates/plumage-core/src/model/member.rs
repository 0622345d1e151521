//! Member types for the structural model.

use std::fmt;

/// Visibility of a declared member, mapped from source modifiers.
///
/// The mapping checks modifiers in the order private, protected, public;
/// anything else (including no modifier at all) is package visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Private,
    Protected,
    Public,
    Package,
}

impl Visibility {
    /// Derive the visibility from a raw modifier string.
    ///
    /// # Examples
    ///
    /// ```
    /// use plumage_core::model::Visibility;
    ///
    /// assert_eq!(Visibility::from_modifiers("private static"), Visibility::Private);
    /// assert_eq!(Visibility::from_modifiers("static final"), Visibility::Package);
    /// ```
    pub fn from_modifiers(modifiers: &str) -> Self {
        if modifiers.contains("private") {
            Visibility::Private
        } else if modifiers.contains("protected") {
            Visibility::Protected
        } else if modifiers.contains("public") {
            Visibility::Public
        } else {
            Visibility::Package
        }
    }

    /// The UML symbol for this visibility: `-`, `#`, `+`, or `~`.
    pub fn symbol(self) -> char {
        match self {
            Visibility::Private => '-',
            Visibility::Protected => '#',
            Visibility::Public => '+',
            Visibility::Package => '~',
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A declared field: visibility, raw type reference, and name.
///
/// The type reference has generic arguments stripped at extraction time but
/// keeps array markers and any namespace qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    visibility: Visibility,
    type_ref: String,
    name: String,
}

impl Field {
    /// Create a new field record.
    pub fn new(visibility: Visibility, type_ref: String, name: String) -> Self {
        Self {
            visibility,
            type_ref,
            name,
        }
    }

    /// Get the field's visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Get the field's raw type reference.
    pub fn type_ref(&self) -> &str {
        &self.type_ref
    }

    /// Get the field's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A declared parameter: raw type reference and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    type_ref: String,
    name: String,
}

impl Parameter {
    /// Create a new parameter record.
    pub fn new(type_ref: String, name: String) -> Self {
        Self { type_ref, name }
    }

    /// Get the parameter's raw type reference.
    pub fn type_ref(&self) -> &str {
        &self.type_ref
    }

    /// Get the parameter's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A declared method: visibility, return type, name, and ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    visibility: Visibility,
    return_type: String,
    name: String,
    parameters: Vec<Parameter>,
}

impl Method {
    /// Create a new method record.
    pub fn new(
        visibility: Visibility,
        return_type: String,
        name: String,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            visibility,
            return_type,
            name,
            parameters,
        }
    }

    /// Get the method's visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Get the method's raw return type reference.
    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    /// Get the method's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the method's parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

/// A declared constructor: visibility, name, and ordered parameters.
///
/// The name always equals the simple name of the declaring type; that
/// equality is what distinguishes a constructor match from a method match
/// during extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    visibility: Visibility,
    name: String,
    parameters: Vec<Parameter>,
}

impl Constructor {
    /// Create a new constructor record.
    pub fn new(visibility: Visibility, name: String, parameters: Vec<Parameter>) -> Self {
        Self {
            visibility,
            name,
            parameters,
        }
    }

    /// Get the constructor's visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Get the constructor's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the constructor's parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}
