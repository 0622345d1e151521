//! Identifier management using string interning for efficient string storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner based approach.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning
///
/// This type provides efficient storage and comparison of qualified and
/// simple type names through string interning. Two `Id`s created from the
/// same text are always equal.
///
/// # Examples
///
/// ```
/// use plumage_core::identifier::Id;
///
/// // Create identifiers from names
/// let base_id = Id::new("app.Base");
/// let same_id = Id::new("app.Base");
/// assert_eq!(base_id, same_id);
///
/// // Build a qualified identifier from a namespace and a simple name
/// let child_id = Id::qualify("app", "Child");
/// assert_eq!(child_id, "app.Child");
///
/// // An empty namespace yields the bare simple name
/// let root_id = Id::qualify("", "Main");
/// assert_eq!(root_id, "Main");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use plumage_core::identifier::Id;
    ///
    /// let type_id = Id::new("OrderService");
    /// let qualified_id = Id::new("shop.OrderService");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Creates a qualified `Id` by joining a namespace and a simple name with '.'.
    ///
    /// An empty namespace produces the bare simple name, so root-namespace
    /// types are keyed by their simple name alone.
    ///
    /// # Arguments
    ///
    /// * `namespace` - The dotted namespace path, possibly empty.
    /// * `simple` - The simple name within that namespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use plumage_core::identifier::Id;
    ///
    /// assert_eq!(Id::qualify("app.model", "User"), "app.model.User");
    /// assert_eq!(Id::qualify("", "User"), "User");
    /// ```
    pub fn qualify(namespace: &str, simple: &str) -> Self {
        if namespace.is_empty() {
            Self::new(simple)
        } else {
            Self::new(&format!("{namespace}.{simple}"))
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plumage_core::identifier::Id;
    ///
    /// let id: Id = "example".into();
    /// assert_eq!(id, "example");
    /// ```
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    ///
    /// # Examples
    ///
    /// ```
    /// use plumage_core::identifier::Id;
    ///
    /// let id = Id::new("Order");
    /// assert!(id == "Order");
    /// ```
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
