//! Helpers for simplifying textual type references.
//!
//! Type references recovered by pattern matching are plain text: possibly
//! namespace-qualified, possibly carrying generic arguments or array
//! markers. These helpers reduce them for display and resolution. All of
//! them are pure and never fail on malformed input.

use std::sync::LazyLock;

use regex::Regex;

/// A generic argument span: `<` up to the nearest `>` on the same line.
static GENERIC_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<.*?>").expect("generic span regex"));

/// Built-in type names that never produce association edges.
///
/// Covers the primitives, their wrapper types, `String`, and `Object`.
pub const BUILTINS: &[&str] = &[
    "byte",
    "short",
    "int",
    "long",
    "float",
    "double",
    "boolean",
    "char",
    "void",
    "String",
    "Integer",
    "Long",
    "Double",
    "Float",
    "Boolean",
    "Character",
    "Object",
];

/// Whether a simple type name is one of the built-in exclusions.
pub fn is_builtin(simple: &str) -> bool {
    BUILTINS.contains(&simple)
}

/// The trailing segment of a dotted reference, trimmed.
///
/// # Examples
///
/// ```
/// use plumage_core::typename::simple_name;
///
/// assert_eq!(simple_name("shop.billing.Invoice"), "Invoice");
/// assert_eq!(simple_name("Invoice"), "Invoice");
/// ```
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit('.')
        .next()
        .unwrap_or(qualified)
        .trim()
}

/// Strip generic argument spans from a type reference: `List<Foo>` -> `List`.
///
/// Each `<` is paired with the nearest following `>`, so deeply nested
/// generics reduce imprecisely; that matches the tolerance of the pattern
/// scans that produced the reference in the first place.
pub fn strip_generics(type_ref: &str) -> String {
    GENERIC_SPAN.replace_all(type_ref.trim(), "").into_owned()
}

/// Strip one trailing array marker: `int[]` -> `int`, `int[][]` -> `int[]`.
pub fn strip_array_suffix(type_ref: &str) -> &str {
    type_ref.strip_suffix("[]").unwrap_or(type_ref)
}
